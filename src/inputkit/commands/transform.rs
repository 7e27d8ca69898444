use crate::commands::{check_diagnostics, CmdResult};
use crate::config::FieldConfig;
use crate::error::Result;

/// Run `value` through the transform pipeline of the configured field.
pub fn run(field: &FieldConfig, value: &str, strict: bool) -> Result<CmdResult> {
    let field = field.text_field()?;
    let messages = check_diagnostics(field.diagnostics(), strict)?;
    let transformed = field.transform(value);

    Ok(CmdResult::default()
        .with_value(transformed)
        .with_messages(messages))
}
