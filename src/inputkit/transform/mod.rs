//! # Value Transformation
//!
//! A text input never writes its raw value straight into the bound model. The
//! value first runs through a pipeline of [`Transform`]s:
//!
//! ```text
//! raw ──► filters ──► modifiers ──► model modifiers ──► model
//! ```
//!
//! - **Filters** remove characters (`letters`, `numbers`, or a pattern whose
//!   matches are kept).
//! - **Modifiers** rewrite the string (`uppercase`, `lowercase`, or any
//!   function).
//! - **Model modifiers** are the per-binding flags in [`ModelModifiers`].
//!
//! Specs are resolved into functions once per configuration change (see
//! [`spec`]); [`apply`] is then called on every value change.

pub mod presets;
pub mod spec;

use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub use presets::{numeric_filter, TransformPreset, FILTER_PRESETS, MODIFIER_PRESETS};
pub use spec::{resolve_filters, resolve_modifiers, TransformSpec};

/// Signature of every transform: a pure `&str -> String` function.
pub type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// A named, cheaply cloneable string transform.
#[derive(Clone)]
pub struct Transform {
    name: Cow<'static, str>,
    func: Arc<TransformFn>,
}

impl Transform {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Wrap an anonymous user function.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new("custom", func)
    }

    /// Keep only the substrings matched by `pattern`, concatenated.
    ///
    /// A value with no match becomes the empty string.
    pub fn keep_matches(pattern: Regex) -> Self {
        let name = format!("/{}/", pattern.as_str());
        Self::new(name, move |value: &str| {
            pattern.find_iter(value).map(|m| m.as_str()).collect()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, value: &str) -> String {
        (self.func)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .finish()
    }
}

/// Run `value` through `transforms`, first to last.
///
/// Accepts anything that iterates over `&Transform` or `Option<&Transform>`;
/// `None` entries are skipped. An empty value short-circuits to `""` without
/// calling any transform, and an empty list returns the value unchanged.
pub fn apply<'a, I>(value: &str, transforms: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Transform>>,
{
    if value.is_empty() {
        return String::new();
    }

    transforms
        .into_iter()
        .filter_map(|t| -> Option<&'a Transform> { t.into() })
        .fold(value.to_string(), |current, transform| {
            transform.call(&current)
        })
}

/// Flags a binding can set on its model, applied after filters and modifiers.
///
/// Order is fixed: trim, then lowercase, then uppercase. With both case flags
/// set the result is upper case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelModifiers {
    pub trim: bool,
    pub lowercase: bool,
    pub uppercase: bool,
}

impl ModelModifiers {
    pub fn is_empty(&self) -> bool {
        !(self.trim || self.lowercase || self.uppercase)
    }

    /// The transforms these flags stand for, in application order.
    pub fn transforms(&self) -> Vec<Transform> {
        let mut transforms = Vec::new();
        if self.trim {
            transforms.push(Transform::new("trim", |value: &str| value.trim().to_string()));
        }
        let preset = |name| presets::modifier_preset(name).map(|p| p.to_transform());
        if self.lowercase {
            transforms.extend(preset("lowercase"));
        }
        if self.uppercase {
            transforms.extend(preset("uppercase"));
        }
        transforms
    }
}
