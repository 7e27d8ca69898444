use crate::commands::{check_diagnostics, CmdResult};
use crate::error::Result;
use crate::field::FileField;
use crate::model::SelectedFile;
use crate::validation::ValidationSpec;
use std::path::PathBuf;

/// Validate a file selection built from paths on disk.
pub fn run(
    paths: &[PathBuf],
    validators: &[String],
    required_message: Option<&str>,
    strict: bool,
) -> Result<CmdResult> {
    let files = paths
        .iter()
        .map(SelectedFile::from_path)
        .collect::<Result<Vec<_>>>()?;

    let specs: Vec<_> = validators
        .iter()
        .map(|name| ValidationSpec::preset(name.as_str()))
        .collect();
    let field = FileField::new(&specs, required_message);
    let messages = check_diagnostics(field.diagnostics(), strict)?;
    let validation = field.validate(&files);

    Ok(CmdResult::default()
        .with_files(files)
        .with_validation(validation)
        .with_messages(messages))
}
