//! Transform specs and their resolution into functions.
//!
//! A spec entry is one of three things: a preset name, a pattern, or a user
//! function. Config files and the CLI only carry strings, so [`TransformSpec`]
//! parses from a string: `/.../flags` is a pattern, anything else is a preset
//! name. Pattern syntax errors surface at parse time; unknown preset names
//! are only discovered at resolution, where they are dropped with a
//! diagnostic.

use super::presets::{filter_preset, modifier_preset};
use super::Transform;
use crate::diagnostics::{DiagnosticKind, Resolved};
use crate::error::{InputkitError, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::str::FromStr;

static PATTERN_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(?P<source>.+)/(?P<flags>[gi]*)$")
        .expect("pattern literal regex is valid")
});

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub enum TransformSpec {
    /// A registered preset, looked up by name at resolution time.
    Preset(String),
    /// Keep only the substrings this pattern matches.
    Pattern(Regex),
    Custom(Transform),
}

impl TransformSpec {
    pub fn preset(name: impl Into<String>) -> Self {
        TransformSpec::Preset(name.into())
    }

    /// Compile a pattern spec from bare regex source (no slashes).
    pub fn pattern(source: &str) -> Result<Self> {
        compile(source, false).map(TransformSpec::Pattern)
    }

    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        TransformSpec::Custom(Transform::from_fn(func))
    }

    /// Short label used in diagnostics and listings.
    pub fn label(&self) -> String {
        match self {
            TransformSpec::Preset(name) => name.clone(),
            TransformSpec::Pattern(pattern) => format!("/{}/", pattern.as_str()),
            TransformSpec::Custom(transform) => transform.name().to_string(),
        }
    }
}

fn compile(source: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|err| InputkitError::InvalidPattern {
            pattern: source.to_string(),
            source: err,
        })
}

impl FromStr for TransformSpec {
    type Err = InputkitError;

    fn from_str(s: &str) -> Result<Self> {
        let Some(caps) = PATTERN_LITERAL.captures(s) else {
            return Ok(TransformSpec::Preset(s.to_string()));
        };

        // `g` is accepted for familiarity; matching is always global.
        let case_insensitive = caps["flags"].contains('i');
        compile(&caps["source"], case_insensitive).map(TransformSpec::Pattern)
    }
}

impl TryFrom<String> for TransformSpec {
    type Error = InputkitError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Transform> for TransformSpec {
    fn from(transform: Transform) -> Self {
        TransformSpec::Custom(transform)
    }
}

impl From<Regex> for TransformSpec {
    fn from(pattern: Regex) -> Self {
        TransformSpec::Pattern(pattern)
    }
}

/// Resolve filter specs into transforms, in order.
///
/// Unknown preset names are dropped with an "Unknown filter preset provided"
/// diagnostic.
pub fn resolve_filters(specs: &[TransformSpec]) -> Resolved<Transform> {
    let mut resolved = Resolved::default();

    for spec in specs {
        match spec {
            TransformSpec::Custom(transform) => resolved.push(transform.clone()),
            TransformSpec::Pattern(pattern) => {
                resolved.push(Transform::keep_matches(pattern.clone()))
            }
            TransformSpec::Preset(name) => match filter_preset(name) {
                Some(preset) => resolved.push(preset.to_transform()),
                None => resolved.skip(DiagnosticKind::UnknownFilterPreset, name.as_str()),
            },
        }
    }

    tracing::debug!(
        requested = specs.len(),
        resolved = resolved.functions.len(),
        "resolved filters"
    );
    resolved
}

/// Resolve modifier specs into transforms, in order.
///
/// Modifiers do not take patterns; a pattern entry is dropped with an
/// "Unknown modifier provided" diagnostic, an unknown preset name with
/// "Unknown modifier preset provided".
pub fn resolve_modifiers(specs: &[TransformSpec]) -> Resolved<Transform> {
    let mut resolved = Resolved::default();

    for spec in specs {
        match spec {
            TransformSpec::Custom(transform) => resolved.push(transform.clone()),
            TransformSpec::Pattern(_) => {
                resolved.skip(DiagnosticKind::UnsupportedModifier, spec.label())
            }
            TransformSpec::Preset(name) => match modifier_preset(name) {
                Some(preset) => resolved.push(preset.to_transform()),
                None => resolved.skip(DiagnosticKind::UnknownModifierPreset, name.as_str()),
            },
        }
    }

    tracing::debug!(
        requested = specs.len(),
        resolved = resolved.functions.len(),
        "resolved modifiers"
    );
    resolved
}
