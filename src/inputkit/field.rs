//! # Field Bindings
//!
//! A field is the headless half of an enhanced input: it owns the spec lists
//! an input was configured with, resolves them whenever the configuration
//! changes, and then runs the resolved functions on every value change.
//!
//! ```text
//! set_filters / set_validators / ...   ──► resolve (once)
//! transform / validate / commit        ──► run (per change)
//! ```
//!
//! Resolution diagnostics are kept on the field ([`TextField::diagnostics`])
//! so a caller can surface them or refuse to continue. A field logs a
//! diagnostic once, when the change that introduced it is made.

use crate::diagnostics::{log_new, Diagnostic, DiagnosticKind};
use crate::error::Result;
use crate::model::{CheckableModel, SelectedFile};
use crate::transform::{
    apply, numeric_filter, resolve_filters, resolve_modifiers, ModelModifiers, Transform,
    TransformSpec,
};
use crate::validation::{
    replace_required_preset, resolve_validators, validate, validate_checkable, validate_files,
    validate_radio, Checkable, CheckableValidator, FileValidator, Files, ModelKind, Radio,
    RadioValidator, Text, TextValidator, ValidationResult, ValidationSpec,
};
use serde::Serialize;

/// The flavour of a text-like input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextKind {
    #[default]
    Text,
    TextArea,
    Password,
    /// Keeps digits plus the `allowed` characters before any user filter.
    Numeric { allowed: String },
}

/// What a text field produces for one value change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub value: String,
    pub validation: ValidationResult,
}

/// Resolve a validator list for kind `K`, honouring a custom required
/// message.
fn resolve_for<K: ModelKind>(
    specs: &[ValidationSpec<K::Validator>],
    required_message: Option<&str>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<K::Validator> {
    let resolved = match required_message {
        Some(message) => {
            let replaced = replace_required_preset(specs, Some(K::required_with_message(message)));
            resolve_validators::<K>(&replaced)
        }
        None => resolve_validators::<K>(specs),
    };
    diagnostics.extend(resolved.diagnostics);
    resolved.functions
}

pub struct TextField {
    kind: TextKind,
    filters: Vec<TransformSpec>,
    modifiers: Vec<TransformSpec>,
    model_modifiers: ModelModifiers,
    validators: Vec<ValidationSpec<TextValidator>>,
    required_message: Option<String>,
    default_filter: Option<Transform>,
    resolved_filters: Vec<Transform>,
    resolved_modifiers: Vec<Transform>,
    resolved_validators: Vec<TextValidator>,
    diagnostics: Vec<Diagnostic>,
}

impl TextField {
    pub fn new(kind: TextKind) -> Result<Self> {
        let default_filter = match &kind {
            TextKind::Numeric { allowed } => Some(numeric_filter(allowed)?),
            _ => None,
        };
        let mut field = Self::plain(kind);
        field.default_filter = default_filter;
        field.resolve();
        Ok(field)
    }

    pub fn text() -> Self {
        Self::plain(TextKind::Text)
    }

    pub fn textarea() -> Self {
        Self::plain(TextKind::TextArea)
    }

    pub fn password() -> Self {
        Self::plain(TextKind::Password)
    }

    pub fn numeric(allowed: &str) -> Result<Self> {
        Self::new(TextKind::Numeric {
            allowed: allowed.to_string(),
        })
    }

    fn plain(kind: TextKind) -> Self {
        Self {
            kind,
            filters: Vec::new(),
            modifiers: Vec::new(),
            model_modifiers: ModelModifiers::default(),
            validators: Vec::new(),
            required_message: None,
            default_filter: None,
            resolved_filters: Vec::new(),
            resolved_modifiers: Vec::new(),
            resolved_validators: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn kind(&self) -> &TextKind {
        &self.kind
    }

    pub fn with_filters(mut self, filters: Vec<TransformSpec>) -> Self {
        self.set_filters(filters);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<TransformSpec>) -> Self {
        self.set_modifiers(modifiers);
        self
    }

    pub fn with_model_modifiers(mut self, model_modifiers: ModelModifiers) -> Self {
        self.set_model_modifiers(model_modifiers);
        self
    }

    pub fn with_validators(mut self, validators: Vec<ValidationSpec<TextValidator>>) -> Self {
        self.set_validators(validators);
        self
    }

    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.set_required_message(Some(message.into()));
        self
    }

    pub fn set_filters(&mut self, filters: Vec<TransformSpec>) {
        self.filters = filters;
        self.resolve();
    }

    pub fn set_modifiers(&mut self, modifiers: Vec<TransformSpec>) {
        self.modifiers = modifiers;
        self.resolve();
    }

    pub fn set_model_modifiers(&mut self, model_modifiers: ModelModifiers) {
        self.model_modifiers = model_modifiers;
        self.resolve();
    }

    pub fn set_validators(&mut self, validators: Vec<ValidationSpec<TextValidator>>) {
        self.validators = validators;
        self.resolve();
    }

    pub fn set_required_message(&mut self, message: Option<String>) {
        self.required_message = message;
        self.resolve();
    }

    fn resolve(&mut self) {
        let filters = resolve_filters(&self.filters);
        let modifiers = resolve_modifiers(&self.modifiers);

        let mut diagnostics = filters.diagnostics;
        diagnostics.extend(modifiers.diagnostics);

        self.resolved_validators = resolve_for::<Text>(
            &self.validators,
            self.required_message.as_deref(),
            &mut diagnostics,
        );

        self.resolved_filters = self
            .default_filter
            .iter()
            .cloned()
            .chain(filters.functions)
            .collect();
        self.resolved_modifiers = modifiers
            .functions
            .into_iter()
            .chain(self.model_modifiers.transforms())
            .collect();
        log_new(&self.diagnostics, &diagnostics);
        self.diagnostics = diagnostics;
    }

    /// Diagnostics from the last resolution, in spec order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Run a raw value through filters, modifiers and model modifiers.
    pub fn transform(&self, value: &str) -> String {
        apply(
            value,
            self.resolved_filters.iter().chain(&self.resolved_modifiers),
        )
    }

    pub fn validate(&self, value: &str) -> ValidationResult {
        validate(value, &self.resolved_validators)
    }

    /// Transform `raw`, then validate the transformed value.
    pub fn commit(&self, raw: &str) -> FieldUpdate {
        let value = self.transform(raw);
        let validation = self.validate(&value);
        tracing::debug!(valid = validation.valid, "committed field value");
        FieldUpdate { value, validation }
    }

    /// Whether a typed key survives the filters unchanged.
    pub fn accepts(&self, key: &str) -> bool {
        apply(key, &self.resolved_filters) == key
    }

    /// Filter pasted text before it is inserted.
    pub fn filter_paste(&self, text: &str) -> String {
        apply(text, &self.resolved_filters)
    }
}

/// A checkbox bound to a flag or to a group of selected values.
pub struct CheckableField {
    value: String,
    resolved_validators: Vec<CheckableValidator>,
    diagnostics: Vec<Diagnostic>,
}

impl CheckableField {
    /// A checkbox carrying option `value` (empty for a plain flag).
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            resolved_validators: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_validators(
        mut self,
        validators: &[ValidationSpec<CheckableValidator>],
        required_message: Option<&str>,
    ) -> Self {
        let mut diagnostics = Vec::new();
        self.resolved_validators =
            resolve_for::<Checkable>(validators, required_message, &mut diagnostics);
        log_new(&self.diagnostics, &diagnostics);
        self.diagnostics = diagnostics;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_checked(&self, model: &CheckableModel) -> bool {
        model.is_checked(&self.value)
    }

    /// Check this option. A list or set model is left alone when the
    /// option has no value, and the returned diagnostic says so.
    pub fn check(&self, model: &mut CheckableModel) -> Option<Diagnostic> {
        self.toggle(model, true)
    }

    pub fn uncheck(&self, model: &mut CheckableModel) -> Option<Diagnostic> {
        self.toggle(model, false)
    }

    fn toggle(&self, model: &mut CheckableModel, checked: bool) -> Option<Diagnostic> {
        if model.collection().is_some() && self.value.is_empty() {
            let diagnostic = Diagnostic::new(DiagnosticKind::MissingCheckableValue, "");
            diagnostic.log();
            return Some(diagnostic);
        }
        model.set_checked(&self.value, checked);
        None
    }

    pub fn validate(&self, model: &CheckableModel) -> ValidationResult {
        validate_checkable(model, &self.value, &self.resolved_validators)
    }
}

/// One option of a radio group.
pub struct RadioField {
    value: String,
    resolved_validators: Vec<RadioValidator>,
    diagnostics: Vec<Diagnostic>,
}

impl RadioField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            resolved_validators: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_validators(
        mut self,
        validators: &[ValidationSpec<RadioValidator>],
        required_message: Option<&str>,
    ) -> Self {
        let mut diagnostics = Vec::new();
        self.resolved_validators =
            resolve_for::<Radio>(validators, required_message, &mut diagnostics);
        log_new(&self.diagnostics, &diagnostics);
        self.diagnostics = diagnostics;
        self
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_checked(&self, model: Option<&str>) -> bool {
        model == Some(self.value.as_str())
    }

    pub fn select(&self, model: &mut Option<String>) {
        *model = Some(self.value.clone());
    }

    /// Clear the group, but only if this option is the selected one.
    pub fn clear(&self, model: &mut Option<String>) {
        if self.is_checked(model.as_deref()) {
            *model = None;
        }
    }

    pub fn validate(&self, model: Option<&str>) -> ValidationResult {
        validate_radio(model, &self.resolved_validators)
    }
}

#[derive(Default)]
pub struct FileField {
    resolved_validators: Vec<FileValidator>,
    diagnostics: Vec<Diagnostic>,
}

impl FileField {
    pub fn new(
        validators: &[ValidationSpec<FileValidator>],
        required_message: Option<&str>,
    ) -> Self {
        let mut diagnostics = Vec::new();
        let resolved_validators =
            resolve_for::<Files>(validators, required_message, &mut diagnostics);
        log_new(&[], &diagnostics);
        Self {
            resolved_validators,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn validate(&self, files: &[SelectedFile]) -> ValidationResult {
        validate_files(files, &self.resolved_validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::count_warnings;
    use crate::validation::{text_validator, Verdict};
    use std::collections::HashSet;

    fn specs(names: &[&str]) -> Vec<TransformSpec> {
        names.iter().map(|name| name.parse().unwrap()).collect()
    }

    #[test]
    fn plain_field_is_passthrough() {
        let field = TextField::text();
        assert_eq!(field.transform("Hello 123"), "Hello 123");
        assert!(field.validate("").valid);
        assert!(field.diagnostics().is_empty());
    }

    #[test]
    fn filters_then_modifiers_then_model_modifiers() {
        let field = TextField::text()
            .with_filters(specs(&["numbers"]))
            .with_modifiers(specs(&["uppercase"]))
            .with_model_modifiers(ModelModifiers {
                trim: true,
                ..Default::default()
            });
        assert_eq!(field.transform("  updated 12345 "), "UPDATED");
    }

    #[test]
    fn pattern_filters_from_strings() {
        let field = TextField::textarea().with_filters(specs(&["/[^A-Z]/g"]));
        assert_eq!(field.transform("UPDATED with 12345"), " with 12345");
    }

    #[test]
    fn unknown_specs_are_reported_and_skipped() {
        let field = TextField::text()
            .with_filters(specs(&["digits", "letters"]))
            .with_modifiers(specs(&["title"]))
            .with_validators(vec!["email".into()]);

        assert_eq!(field.transform("abc123"), "123");
        let kinds: Vec<_> = field.diagnostics().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::UnknownFilterPreset,
                DiagnosticKind::UnknownModifierPreset,
                DiagnosticKind::UnknownValidationPreset,
            ]
        );
    }

    #[test]
    fn setters_re_resolve() {
        let mut field = TextField::password().with_filters(specs(&["unknown"]));
        assert_eq!(field.diagnostics().len(), 1);

        field.set_filters(specs(&["numbers"]));
        assert!(field.diagnostics().is_empty());
        assert_eq!(field.transform("pa55word"), "paword");
    }

    #[test]
    fn numeric_field_keeps_digits_and_allowed() {
        let field = TextField::numeric(".,").unwrap();
        assert_eq!(field.transform("Updated 12345.789"), "12345.789");

        let phone = TextField::numeric("-").unwrap();
        assert_eq!(phone.transform("tel: 123-456-789"), "123-456-789");
        assert_eq!(
            phone.kind(),
            &TextKind::Numeric {
                allowed: "-".into()
            }
        );
    }

    #[test]
    fn numeric_default_filter_runs_before_user_filters() {
        let field = TextField::numeric("")
            .unwrap()
            .with_filters(specs(&["/[^3]/"]));
        assert_eq!(field.transform("a12345"), "1245");
    }

    #[test]
    fn commit_validates_transformed_value() {
        let field = TextField::text()
            .with_filters(specs(&["letters"]))
            .with_validators(vec![ValidationSpec::required()])
            .with_required_message("A value is required");

        let update = field.commit("abc");
        assert_eq!(update.value, "");
        assert_eq!(update.validation.failed, vec!["A value is required"]);

        let update = field.commit("a1");
        assert_eq!(update.value, "1");
        assert!(update.validation.valid);
    }

    #[test]
    fn required_without_message_fails_silently() {
        let field = TextField::text()
            .with_validators(vec![ValidationSpec::required()]);
        let result = field.validate("   ");
        assert!(!result.valid);
        assert!(result.failed.is_empty());
    }

    #[test]
    fn custom_validators_run_alongside_required() {
        let short = text_validator(|v: &str| {
            if v.len() <= 3 {
                Verdict::Pass
            } else {
                Verdict::from("Too long")
            }
        });
        let field = TextField::text()
            .with_validators(vec![ValidationSpec::required(), ValidationSpec::custom(short)])
            .with_required_message("Required");

        assert_eq!(field.validate("").failed, vec!["Required"]);
        assert_eq!(field.validate("abcd").failed, vec!["Too long"]);
    }

    #[test]
    fn keypress_and_paste_use_filters_only() {
        let field = TextField::text()
            .with_filters(specs(&["numbers"]))
            .with_modifiers(specs(&["uppercase"]));

        assert!(field.accepts("a"));
        assert!(!field.accepts("9"));
        assert_eq!(field.filter_paste("abc 123"), "abc ");
    }

    #[test]
    fn checkable_flag_model() {
        let field = CheckableField::new("")
            .with_validators(&[ValidationSpec::required()], Some("Accept the terms"));
        let mut model = CheckableModel::default();

        assert!(!field.is_checked(&model));
        assert_eq!(field.validate(&model).failed, vec!["Accept the terms"]);

        assert_eq!(field.check(&mut model), None);
        assert!(field.is_checked(&model));
        assert!(field.validate(&model).valid);
    }

    #[test]
    fn checkable_group_models() {
        let red = CheckableField::new("red");
        let blue = CheckableField::new("blue");

        let mut list = CheckableModel::List(Vec::new());
        red.check(&mut list);
        blue.check(&mut list);
        red.uncheck(&mut list);
        assert_eq!(list, CheckableModel::List(vec!["blue".to_string()]));

        let mut set = CheckableModel::Set(HashSet::new());
        red.check(&mut set);
        assert!(red.is_checked(&set));
        assert!(!blue.is_checked(&set));
    }

    #[test]
    fn checkable_group_warns_on_missing_value() {
        let field = CheckableField::new("");
        let mut model = CheckableModel::List(vec!["a".to_string()]);

        let diagnostic = field.check(&mut model).unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::MissingCheckableValue);
        assert_eq!(diagnostic.to_string(), "Checkable value is not set");
        assert_eq!(model, CheckableModel::List(vec!["a".to_string()]));

        let mut set = CheckableModel::Set(HashSet::new());
        assert!(field.uncheck(&mut set).is_some());
    }

    #[test]
    fn builder_chain_logs_each_unknown_entry_once() {
        let warnings = count_warnings(|| {
            let field = TextField::text()
                .with_filters(specs(&["digits"]))
                .with_modifiers(specs(&["title"]))
                .with_model_modifiers(ModelModifiers::default())
                .with_validators(vec!["email".into()])
                .with_required_message("Required");
            assert_eq!(field.diagnostics().len(), 3);
        });
        assert_eq!(warnings, 3);
    }

    #[test]
    fn replacing_specs_logs_only_new_entries() {
        let warnings = count_warnings(|| {
            let mut field = TextField::text().with_filters(specs(&["digits"]));
            field.set_filters(specs(&["digits", "symbols"]));
            field.set_filters(specs(&["numbers"]));
        });
        assert_eq!(warnings, 2);
    }

    #[test]
    fn radio_select_and_clear() {
        let a = RadioField::new("a")
            .with_validators(&[ValidationSpec::required()], None);
        let b = RadioField::new("b");
        let mut model: Option<String> = None;

        assert!(!a.validate(model.as_deref()).valid);
        a.select(&mut model);
        assert!(a.is_checked(model.as_deref()));
        assert!(!b.is_checked(model.as_deref()));

        b.clear(&mut model);
        assert_eq!(model.as_deref(), Some("a"));
        a.clear(&mut model);
        assert_eq!(model, None);
    }

    #[test]
    fn file_field_required() {
        let field = FileField::new(&[ValidationSpec::required()], Some("Attach a file"));
        assert_eq!(field.validate(&[]).failed, vec!["Attach a file"]);
        assert!(field.validate(&[SelectedFile::new("a.txt", 3)]).valid);

        let unknown = FileField::new(&[ValidationSpec::preset("size")], None);
        assert_eq!(unknown.diagnostics().len(), 1);
    }
}
