//! # Validation
//!
//! Validators are predicates over an input's model that either pass, fail, or
//! fail with a message ([`Verdict`]). The pipeline runs **every** validator,
//! so the resulting [`ValidationResult`] carries all failure messages at once:
//!
//! ```
//! use inputkit::validation::{text_validator, validate, Verdict};
//!
//! let short = text_validator(|v: &str| v.len() < 5);
//! let no_digits = text_validator(|v: &str| {
//!     if v.chars().any(|c| c.is_ascii_digit()) {
//!         Verdict::from("Digits are not allowed")
//!     } else {
//!         Verdict::Pass
//!     }
//! });
//!
//! let result = validate("abc123", [&short, &no_digits]);
//! assert!(!result.valid);
//! assert_eq!(result.failed, vec!["Digits are not allowed"]);
//! ```
//!
//! Each input variant validates a different model shape, so each has its own
//! validator signature and its own meaning of the `required` preset:
//!
//! | Kind | Validator receives | `required` means |
//! |------|--------------------|------------------|
//! | [`Text`] | `&str` | non-blank after trimming |
//! | [`Checkable`] | `&CheckableModel`, option value | flag set / option selected |
//! | [`Radio`] | `Option<&str>` | something is selected |
//! | [`Files`] | `&[SelectedFile]` | at least one file |

pub mod presets;
pub mod spec;

use crate::model::{CheckableModel, SelectedFile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use presets::{ValidationPreset, ValidationPresetId, VALIDATION_PRESETS};
pub use spec::{replace_required_preset, resolve_validators, ValidationSpec};

/// What a single validator decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Failed without a message.
    Fail,
    /// Failed with a message to show the user.
    Message(String),
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Verdict::Message(message.to_string())
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Verdict::Message(message)
    }
}

/// Aggregate outcome of running a set of validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Messages of the validators that failed with one, in validator order.
    pub failed: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            failed: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Pass => {}
            Verdict::Fail => self.valid = false,
            Verdict::Message(message) => {
                self.valid = false;
                self.failed.push(message);
            }
        }
    }
}

impl FromIterator<Verdict> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Verdict>>(verdicts: I) -> Self {
        let mut result = ValidationResult::default();
        for verdict in verdicts {
            result.record(verdict);
        }
        result
    }
}

pub type TextValidator = Arc<dyn Fn(&str) -> Verdict + Send + Sync>;
pub type CheckableValidator = Arc<dyn Fn(&CheckableModel, &str) -> Verdict + Send + Sync>;
pub type RadioValidator = Arc<dyn Fn(Option<&str>) -> Verdict + Send + Sync>;
pub type FileValidator = Arc<dyn Fn(&[SelectedFile]) -> Verdict + Send + Sync>;

pub fn text_validator<F, R>(func: F) -> TextValidator
where
    F: Fn(&str) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    Arc::new(move |value: &str| func(value).into())
}

pub fn checkable_validator<F, R>(func: F) -> CheckableValidator
where
    F: Fn(&CheckableModel, &str) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    Arc::new(move |model: &CheckableModel, value: &str| func(model, value).into())
}

pub fn radio_validator<F, R>(func: F) -> RadioValidator
where
    F: Fn(Option<&str>) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    Arc::new(move |model: Option<&str>| func(model).into())
}

pub fn file_validator<F, R>(func: F) -> FileValidator
where
    F: Fn(&[SelectedFile]) -> R + Send + Sync + 'static,
    R: Into<Verdict>,
{
    Arc::new(move |files: &[SelectedFile]| func(files).into())
}

/// A model shape that validators can be resolved for.
///
/// The kind decides what a preset name turns into, which is how `required`
/// gets a different meaning per input.
pub trait ModelKind {
    type Validator: Clone;

    fn preset(preset: ValidationPresetId) -> Self::Validator;

    /// The `required` check of this kind, failing with `message`.
    fn required_with_message(message: &str) -> Self::Validator;
}

/// Plain string models (text, textarea, password, numeric inputs).
pub struct Text;
/// Checkbox models.
pub struct Checkable;
/// Radio group models.
pub struct Radio;
/// File input models.
pub struct Files;

fn present<'a, V, I>(validators: I) -> impl Iterator<Item = &'a V>
where
    V: 'a,
    I: IntoIterator,
    I::Item: Into<Option<&'a V>>,
{
    validators
        .into_iter()
        .filter_map(|v| -> Option<&'a V> { v.into() })
}

/// Validate a string value. `None` entries are skipped.
pub fn validate<'a, I>(value: &str, validators: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Into<Option<&'a TextValidator>>,
{
    present::<TextValidator, _>(validators)
        .map(|validator| validator(value))
        .collect()
}

/// Validate a checkable model on behalf of the option carrying `value`.
pub fn validate_checkable<'a, I>(
    model: &CheckableModel,
    value: &str,
    validators: I,
) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Into<Option<&'a CheckableValidator>>,
{
    present::<CheckableValidator, _>(validators)
        .map(|validator| validator(model, value))
        .collect()
}

pub fn validate_radio<'a, I>(model: Option<&str>, validators: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Into<Option<&'a RadioValidator>>,
{
    present::<RadioValidator, _>(validators)
        .map(|validator| validator(model))
        .collect()
}

pub fn validate_files<'a, I>(files: &[SelectedFile], validators: I) -> ValidationResult
where
    I: IntoIterator,
    I::Item: Into<Option<&'a FileValidator>>,
{
    present::<FileValidator, _>(validators)
        .map(|validator| validator(files))
        .collect()
}
