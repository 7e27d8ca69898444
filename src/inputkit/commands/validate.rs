use crate::commands::{check_diagnostics, CmdResult};
use crate::config::FieldConfig;
use crate::error::Result;

/// Transform `value`, then validate the transformed value.
pub fn run(field: &FieldConfig, value: &str, strict: bool) -> Result<CmdResult> {
    let field = field.text_field()?;
    let messages = check_diagnostics(field.diagnostics(), strict)?;
    let update = field.commit(value);

    Ok(CmdResult::default()
        .with_value(update.value)
        .with_validation(update.validation)
        .with_messages(messages))
}
