use super::presets::ValidationPresetId;
use super::ModelKind;
use crate::diagnostics::{DiagnosticKind, Resolved};
use std::fmt;

/// One entry of a validator list: a preset name or a validator of the
/// model's shape.
#[derive(Clone)]
pub enum ValidationSpec<V> {
    Preset(String),
    Custom(V),
}

impl<V> ValidationSpec<V> {
    pub fn preset(name: impl Into<String>) -> Self {
        ValidationSpec::Preset(name.into())
    }

    pub fn required() -> Self {
        ValidationSpec::Preset(ValidationPresetId::Required.name().to_string())
    }

    pub fn custom(validator: V) -> Self {
        ValidationSpec::Custom(validator)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ValidationSpec::Preset(name) if name == ValidationPresetId::Required.name())
    }
}

impl<V> fmt::Debug for ValidationSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationSpec::Preset(name) => f.debug_tuple("Preset").field(name).finish(),
            ValidationSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<V> From<&str> for ValidationSpec<V> {
    fn from(name: &str) -> Self {
        ValidationSpec::preset(name)
    }
}

impl<V> From<String> for ValidationSpec<V> {
    fn from(name: String) -> Self {
        ValidationSpec::Preset(name)
    }
}

/// Resolve validator specs for model kind `K`, in order.
///
/// Unknown preset names are dropped with an "Unknown validation preset
/// provided" diagnostic.
pub fn resolve_validators<K: ModelKind>(
    specs: &[ValidationSpec<K::Validator>],
) -> Resolved<K::Validator> {
    let mut resolved = Resolved::default();

    for spec in specs {
        match spec {
            ValidationSpec::Custom(validator) => resolved.push(validator.clone()),
            ValidationSpec::Preset(name) => match ValidationPresetId::from_name(name) {
                Some(id) => resolved.push(K::preset(id)),
                None => resolved.skip(DiagnosticKind::UnknownValidationPreset, name.as_str()),
            },
        }
    }

    tracing::debug!(
        requested = specs.len(),
        resolved = resolved.functions.len(),
        "resolved validators"
    );
    resolved
}

/// Swap every `required` preset entry for `replacement`, keeping positions
/// and all other entries. With no replacement the entries are removed.
pub fn replace_required_preset<V: Clone>(
    specs: &[ValidationSpec<V>],
    replacement: Option<V>,
) -> Vec<ValidationSpec<V>> {
    specs
        .iter()
        .filter_map(|spec| {
            if !spec.is_required() {
                return Some(spec.clone());
            }
            replacement.clone().map(ValidationSpec::Custom)
        })
        .collect()
}
