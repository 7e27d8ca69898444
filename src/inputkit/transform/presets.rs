//! Built-in filter and modifier presets.
//!
//! These tables are the single source of truth for preset names. Adding a
//! preset means adding an entry here.

use super::Transform;
use crate::diagnostics::PresetKind;
use crate::error::{InputkitError, Result};
use regex::Regex;

/// A named transform that can be referenced by a string key.
#[derive(Debug, Clone, Copy)]
pub struct TransformPreset {
    pub name: &'static str,
    pub kind: PresetKind,
    pub description: &'static str,
    func: fn(&str) -> String,
}

impl TransformPreset {
    const fn filter(
        name: &'static str,
        description: &'static str,
        func: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            kind: PresetKind::Filter,
            description,
            func,
        }
    }

    const fn modifier(
        name: &'static str,
        description: &'static str,
        func: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            kind: PresetKind::Modifier,
            description,
            func,
        }
    }

    pub fn to_transform(&self) -> Transform {
        Transform::new(self.name, self.func)
    }
}

fn remove_letters(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}

fn remove_numbers(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_digit()).collect()
}

fn uppercase(value: &str) -> String {
    value.to_uppercase()
}

fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

pub const FILTER_PRESETS: &[TransformPreset] = &[
    TransformPreset::filter("letters", "Removes the letters A-Z and a-z", remove_letters),
    TransformPreset::filter("numbers", "Removes the digits 0-9", remove_numbers),
];

pub const MODIFIER_PRESETS: &[TransformPreset] = &[
    TransformPreset::modifier("uppercase", "Converts the value to upper case", uppercase),
    TransformPreset::modifier("lowercase", "Converts the value to lower case", lowercase),
];

pub fn filter_preset(name: &str) -> Option<&'static TransformPreset> {
    FILTER_PRESETS.iter().find(|preset| preset.name == name)
}

pub fn modifier_preset(name: &str) -> Option<&'static TransformPreset> {
    MODIFIER_PRESETS.iter().find(|preset| preset.name == name)
}

/// The default filter of numeric inputs: keeps digits plus every character
/// in `allowed` (e.g. `".,"` for decimals, `"-"` for phone numbers).
pub fn numeric_filter(allowed: &str) -> Result<Transform> {
    let source = format!("[0-9{}]", regex::escape(allowed));
    let pattern = Regex::new(&source).map_err(|source_err| InputkitError::InvalidPattern {
        pattern: source.clone(),
        source: source_err,
    })?;
    Ok(Transform::keep_matches(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, value: &str) -> String {
        filter_preset(name)
            .or_else(|| modifier_preset(name))
            .unwrap()
            .to_transform()
            .call(value)
    }

    #[test]
    fn letters_removes_letters() {
        assert_eq!(run("letters", "a1b2"), "12");
        assert_eq!(run("letters", "updated 12345"), " 12345");
    }

    #[test]
    fn numbers_removes_digits() {
        assert_eq!(run("numbers", "a1b2"), "ab");
        assert_eq!(run("numbers", "updated 12345"), "updated ");
    }

    #[test]
    fn numbers_then_letters_leaves_symbols() {
        let value = run("numbers", "$updated-12345_");
        assert_eq!(run("letters", &value), "$-_");
    }

    #[test]
    fn case_modifiers() {
        assert_eq!(run("uppercase", "ab"), "AB");
        assert_eq!(run("lowercase", "UPDATED 12345"), "updated 12345");
    }

    #[test]
    fn registries_are_disjoint() {
        assert!(filter_preset("uppercase").is_none());
        assert!(modifier_preset("letters").is_none());
        assert!(filter_preset("unknown").is_none());
    }

    #[test]
    fn preset_kinds_match_table() {
        assert!(FILTER_PRESETS.iter().all(|p| p.kind == PresetKind::Filter));
        assert!(MODIFIER_PRESETS.iter().all(|p| p.kind == PresetKind::Modifier));
    }

    #[test]
    fn preset_transform_carries_name() {
        let transform = filter_preset("numbers").unwrap().to_transform();
        assert_eq!(transform.name(), "numbers");
    }

    #[test]
    fn numeric_filter_keeps_digits() {
        let filter = numeric_filter("").unwrap();
        assert_eq!(filter.call("Updated 98765"), "98765");
    }

    #[test]
    fn numeric_filter_keeps_allowed_characters() {
        let decimals = numeric_filter(".,").unwrap();
        assert_eq!(decimals.call("12345.789"), "12345.789");
        assert_eq!(decimals.call("12345,789"), "12345,789");

        let dashes = numeric_filter("-").unwrap();
        assert_eq!(dashes.call("123-456-789"), "123-456-789");
    }

    #[test]
    fn numeric_filter_escapes_class_metacharacters() {
        let filter = numeric_filter("]^\\").unwrap();
        assert_eq!(filter.call("a1]2^3\\"), "1]2^3\\");
    }
}
