//! Built-in validation presets.
//!
//! There is one preset, `required`, but what it checks depends on the model
//! shape, so the table only names it. Each [`ModelKind`] supplies the
//! concrete validator.

use super::{
    checkable_validator, file_validator, radio_validator, text_validator, Checkable,
    CheckableValidator, FileValidator, Files, ModelKind, Radio, RadioValidator, Text,
    TextValidator, Verdict,
};
use crate::diagnostics::PresetKind;
use crate::model::{CheckableModel, SelectedFile};

fn verdict(passed: bool, message: &str) -> Verdict {
    if passed {
        Verdict::Pass
    } else {
        Verdict::from(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationPresetId {
    Required,
}

impl ValidationPresetId {
    pub fn name(&self) -> &'static str {
        match self {
            ValidationPresetId::Required => "required",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        VALIDATION_PRESETS
            .iter()
            .find(|preset| preset.name == name)
            .map(|preset| preset.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ValidationPreset {
    pub id: ValidationPresetId,
    pub name: &'static str,
    pub kind: PresetKind,
    pub description: &'static str,
}

pub const VALIDATION_PRESETS: &[ValidationPreset] = &[ValidationPreset {
    id: ValidationPresetId::Required,
    name: "required",
    kind: PresetKind::Validation,
    description: "Fails when the input has no value",
}];

impl ModelKind for Text {
    type Validator = TextValidator;

    fn preset(preset: ValidationPresetId) -> TextValidator {
        match preset {
            ValidationPresetId::Required => text_validator(|value: &str| !value.trim().is_empty()),
        }
    }

    fn required_with_message(message: &str) -> TextValidator {
        let message = message.to_string();
        text_validator(move |value: &str| verdict(!value.trim().is_empty(), &message))
    }
}

impl ModelKind for Checkable {
    type Validator = CheckableValidator;

    fn preset(preset: ValidationPresetId) -> CheckableValidator {
        match preset {
            ValidationPresetId::Required => {
                checkable_validator(|model: &CheckableModel, value: &str| model.is_checked(value))
            }
        }
    }

    fn required_with_message(message: &str) -> CheckableValidator {
        let message = message.to_string();
        checkable_validator(move |model: &CheckableModel, value: &str| {
            verdict(model.is_checked(value), &message)
        })
    }
}

impl ModelKind for Radio {
    type Validator = RadioValidator;

    fn preset(preset: ValidationPresetId) -> RadioValidator {
        match preset {
            ValidationPresetId::Required => radio_validator(|model: Option<&str>| model.is_some()),
        }
    }

    fn required_with_message(message: &str) -> RadioValidator {
        let message = message.to_string();
        radio_validator(move |model: Option<&str>| verdict(model.is_some(), &message))
    }
}

impl ModelKind for Files {
    type Validator = FileValidator;

    fn preset(preset: ValidationPresetId) -> FileValidator {
        match preset {
            ValidationPresetId::Required => {
                file_validator(|files: &[SelectedFile]| !files.is_empty())
            }
        }
    }

    fn required_with_message(message: &str) -> FileValidator {
        let message = message.to_string();
        file_validator(move |files: &[SelectedFile]| verdict(!files.is_empty(), &message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, validate_checkable, validate_files, validate_radio};
    use std::collections::HashSet;

    #[test]
    fn looks_up_required_by_name() {
        assert_eq!(
            ValidationPresetId::from_name("required"),
            Some(ValidationPresetId::Required)
        );
        assert_eq!(ValidationPresetId::Required.name(), "required");
        assert_eq!(ValidationPresetId::from_name("email"), None);
    }

    #[test]
    fn text_required_ignores_whitespace() {
        let required = Text::preset(ValidationPresetId::Required);
        assert!(validate("abc", [&required]).valid);
        assert!(!validate("", [&required]).valid);
        assert!(!validate("   ", [&required]).valid);
        assert!(validate("", [&required]).failed.is_empty());
    }

    #[test]
    fn checkable_required_follows_model_shape() {
        let required = Checkable::preset(ValidationPresetId::Required);

        assert!(validate_checkable(&true.into(), "", [&required]).valid);
        assert!(!validate_checkable(&false.into(), "", [&required]).valid);

        let list = CheckableModel::from(vec!["test".to_string()]);
        assert!(validate_checkable(&list, "test", [&required]).valid);
        assert!(!validate_checkable(&list, "other", [&required]).valid);
        assert!(!validate_checkable(&list, "", [&required]).valid);

        let set = CheckableModel::from(HashSet::from(["test".to_string()]));
        assert!(validate_checkable(&set, "test", [&required]).valid);
        assert!(!validate_checkable(&set, "other", [&required]).valid);
    }

    #[test]
    fn radio_required_needs_a_selection() {
        let required = Radio::preset(ValidationPresetId::Required);
        assert!(validate_radio(Some("a"), [&required]).valid);
        assert!(validate_radio(Some(""), [&required]).valid);
        assert!(!validate_radio(None, [&required]).valid);
    }

    #[test]
    fn files_required_needs_one_file() {
        let required = Files::preset(ValidationPresetId::Required);
        let files = vec![SelectedFile::new("a.txt", 1)];
        assert!(validate_files(&files, [&required]).valid);
        assert!(!validate_files(&[], [&required]).valid);
    }

    #[test]
    fn required_with_message_reports_it() {
        let text = Text::required_with_message("Name is required");
        assert_eq!(validate(" ", [&text]).failed, vec!["Name is required"]);
        assert!(validate("Ada", [&text]).valid);

        let radio = Radio::required_with_message("Pick one");
        assert_eq!(validate_radio(None, [&radio]).failed, vec!["Pick one"]);

        let files = Files::required_with_message("Attach a file");
        assert_eq!(validate_files(&[], [&files]).failed, vec!["Attach a file"]);

        let checkable = Checkable::required_with_message("Accept the terms");
        assert_eq!(
            validate_checkable(&false.into(), "", [&checkable]).failed,
            vec!["Accept the terms"]
        );
    }
}
