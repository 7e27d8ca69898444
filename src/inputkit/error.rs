use crate::diagnostics::PresetKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputkitError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown {kind} preset: {name}")]
    UnknownPreset { kind: PresetKind, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config file not found: {}", .0.display())]
    MissingConfig(std::path::PathBuf),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InputkitError>;
