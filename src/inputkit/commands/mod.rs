use crate::diagnostics::{Diagnostic, PresetKind};
use crate::error::Result;
use crate::model::SelectedFile;
use crate::validation::ValidationResult;
use serde::Serialize;

pub mod files;
pub mod presets;
pub mod transform;
pub mod validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A preset as listed by `inputkit presets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub kind: PresetKind,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub validation: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<SelectedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<PresetInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_validation(mut self, validation: ValidationResult) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_files(mut self, files: Vec<SelectedFile>) -> Self {
        self.files = files;
        self
    }

    pub fn with_presets(mut self, presets: Vec<PresetInfo>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_messages(mut self, messages: Vec<CmdMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// False only when a validation ran and failed.
    pub fn is_valid(&self) -> bool {
        self.validation.as_ref().is_none_or(|v| v.valid)
    }
}

/// Turn resolution diagnostics into warnings, or in strict mode into an
/// error carrying the first one.
pub fn check_diagnostics(diagnostics: &[Diagnostic], strict: bool) -> Result<Vec<CmdMessage>> {
    if strict {
        if let Some(first) = diagnostics.first() {
            return Err(first.clone().into_error());
        }
    }
    Ok(diagnostics
        .iter()
        .map(|d| CmdMessage::warning(d.to_string()))
        .collect())
}
