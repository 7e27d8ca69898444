//! # Configuration
//!
//! Configuration is derived with [`confique`] and loaded in layers.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `INPUTKIT_STRICT`, `INPUTKIT_FILTERS`, etc.
//! 2. **Explicit file**: the path given with `--config`.
//! 3. **Local file**: `./inputkit.toml`.
//! 4. **Global file**: `inputkit.toml` in the OS config directory (via `directories`).
//! 5. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `strict` | `false` | Treat unknown presets as errors |
//! | `json` | `false` | Print JSON instead of text |
//! | `field.filters` | `[]` | Filter specs (`"letters"`, `"/[^0-9]/g"`) |
//! | `field.modifiers` | `[]` | Modifier specs (`"uppercase"`) |
//! | `field.validators` | `[]` | Validator preset names (`"required"`) |
//! | `field.required_message` | none | Message reported by `required` |
//! | `field.trim` / `lowercase` / `uppercase` | `false` | Model modifiers |
//! | `field.numeric` | `false` | Apply the numeric default filter |
//! | `field.allow` | `""` | Extra characters numeric fields keep |
//!
//! List values can be given in the environment comma separated:
//! `INPUTKIT_FILTERS=numbers,/[^a]/`. The split is plain, so a pattern that
//! contains a comma (`/[,.]/`) cannot be set this way; put it in a config
//! file instead.

use crate::error::{InputkitError, Result};
use crate::field::{TextField, TextKind};
use crate::transform::{ModelModifiers, TransformSpec};
use crate::validation::ValidationSpec;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "inputkit.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct InputkitConfig {
    /// Fail instead of warning when a spec entry cannot be resolved.
    #[config(default = false, env = "INPUTKIT_STRICT")]
    pub strict: bool,

    /// Print results as JSON.
    #[config(default = false, env = "INPUTKIT_JSON")]
    pub json: bool,

    #[config(nested)]
    pub field: FieldConfig,
}

/// The text field every command starts from.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    #[config(
        default = [],
        env = "INPUTKIT_FILTERS",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub filters: Vec<String>,

    #[config(
        default = [],
        env = "INPUTKIT_MODIFIERS",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub modifiers: Vec<String>,

    #[config(
        default = [],
        env = "INPUTKIT_VALIDATORS",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub validators: Vec<String>,

    #[config(env = "INPUTKIT_REQUIRED_MESSAGE")]
    pub required_message: Option<String>,

    #[config(default = false)]
    pub trim: bool,

    #[config(default = false)]
    pub lowercase: bool,

    #[config(default = false)]
    pub uppercase: bool,

    #[config(default = false)]
    pub numeric: bool,

    #[config(default = "")]
    pub allow: String,
}

impl InputkitConfig {
    /// Load the layered configuration. An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_files(&config_paths(explicit)?)
    }

    /// Load from the environment plus `files`, highest priority first.
    /// Missing files are skipped.
    pub fn load_files(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        let config = builder.load()?;
        tracing::debug!(?files, strict = config.strict, "loaded config");
        Ok(config)
    }
}

/// Candidate config files, highest priority first.
pub fn config_paths(explicit: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(InputkitError::MissingConfig(path.to_path_buf()));
        }
        paths.push(path.to_path_buf());
    }
    paths.push(PathBuf::from(CONFIG_FILENAME));
    if let Some(global) = global_config_file() {
        paths.push(global);
    }
    Ok(paths)
}

pub fn global_config_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "inputkit", "inputkit")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn parse_specs(raw: &[String]) -> Result<Vec<TransformSpec>> {
    raw.iter().map(|spec| spec.parse()).collect()
}

impl FieldConfig {
    /// Parse the configured filters. Pattern syntax errors fail here.
    pub fn filter_specs(&self) -> Result<Vec<TransformSpec>> {
        parse_specs(&self.filters)
    }

    pub fn modifier_specs(&self) -> Result<Vec<TransformSpec>> {
        parse_specs(&self.modifiers)
    }

    /// Validator presets by name, for any model kind.
    pub fn validator_specs<V>(&self) -> Vec<ValidationSpec<V>> {
        self.validators
            .iter()
            .map(|name| ValidationSpec::preset(name.as_str()))
            .collect()
    }

    pub fn model_modifiers(&self) -> ModelModifiers {
        ModelModifiers {
            trim: self.trim,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
        }
    }

    pub fn text_kind(&self) -> TextKind {
        if self.numeric {
            TextKind::Numeric {
                allowed: self.allow.clone(),
            }
        } else {
            TextKind::Text
        }
    }

    /// Build a resolved text field from this configuration.
    pub fn text_field(&self) -> Result<TextField> {
        let mut field = TextField::new(self.text_kind())?
            .with_filters(self.filter_specs()?)
            .with_modifiers(self.modifier_specs()?)
            .with_model_modifiers(self.model_modifiers())
            .with_validators(self.validator_specs());
        field.set_required_message(self.required_message.clone());
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::count_warnings;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let config = InputkitConfig::load_files(&[missing]).unwrap();

        assert!(!config.strict);
        assert!(!config.json);
        assert!(config.field.filters.is_empty());
        assert_eq!(config.field.required_message, None);
        assert_eq!(config.field.text_kind(), TextKind::Text);
    }

    #[test]
    fn reads_nested_field_table() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "inputkit.toml",
            r#"
strict = true

[field]
filters = ["numbers", "/[^_]/"]
modifiers = ["uppercase"]
validators = ["required"]
required_message = "Please fill in"
trim = true
"#,
        );

        let config = InputkitConfig::load_files(&[path]).unwrap();
        assert!(config.strict);
        assert_eq!(config.field.filters, vec!["numbers", "/[^_]/"]);
        assert!(config.field.model_modifiers().trim);

        let field = config.field.text_field().unwrap();
        assert!(field.diagnostics().is_empty());
        assert_eq!(field.transform(" ab_1 "), "AB");
        assert_eq!(field.validate("").failed, vec!["Please fill in"]);
    }

    #[test]
    fn earlier_files_win() {
        let dir = TempDir::new().unwrap();
        let high = write_config(&dir, "high.toml", "json = true\n");
        let low = write_config(&dir, "low.toml", "json = false\nstrict = true\n");

        let config = InputkitConfig::load_files(&[high, low]).unwrap();
        assert!(config.json);
        assert!(config.strict);
    }

    #[test]
    fn building_a_field_logs_each_unknown_entry_once() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "typos.toml",
            r#"
[field]
filters = ["digits"]
validators = ["email"]
required_message = "Please fill in"
trim = true
"#,
        );
        let config = InputkitConfig::load_files(&[path]).unwrap();

        let warnings = count_warnings(|| {
            let field = config.field.text_field().unwrap();
            assert_eq!(field.diagnostics().len(), 2);
        });
        assert_eq!(warnings, 2);
    }

    #[test]
    fn numeric_field_from_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "n.toml",
            "[field]\nnumeric = true\nallow = \".,\"\n",
        );

        let config = InputkitConfig::load_files(&[path]).unwrap();
        let field = config.field.text_field().unwrap();
        assert_eq!(field.transform("EUR 12,50"), "12,50");
    }

    #[test]
    fn invalid_pattern_in_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "bad.toml", "[field]\nfilters = [\"/(/\"]\n");

        let config = InputkitConfig::load_files(&[path]).unwrap();
        let err = config.field.text_field().err().unwrap();
        assert!(matches!(err, InputkitError::InvalidPattern { .. }));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "broken.toml", "strict = \n");

        let err = InputkitConfig::load_files(&[path]).unwrap_err();
        assert!(matches!(err, InputkitError::Config(_)));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = config_paths(Some(&missing)).unwrap_err();
        assert!(matches!(err, InputkitError::MissingConfig(_)));
    }

    #[test]
    fn explicit_config_comes_first() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "mine.toml", "");

        let paths = config_paths(Some(&path)).unwrap();
        assert_eq!(paths[0], path);
        assert_eq!(paths[1], PathBuf::from(CONFIG_FILENAME));
    }
}
