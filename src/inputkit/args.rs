use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inputkit")]
#[command(about = "Filter, modify and validate form input values", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to load before ./inputkit.toml and the global config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Fail on unknown presets instead of warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a value through filters and modifiers
    #[command(alias = "t")]
    Transform {
        /// The value, or - to read it from stdin
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Transform a value, then validate the result
    #[command(alias = "v")]
    Validate {
        /// The value, or - to read it from stdin
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Validator preset (repeatable)
        #[arg(long = "validator", value_name = "PRESET")]
        validators: Vec<String>,

        /// Shorthand for --validator required
        #[arg(long)]
        required: bool,

        /// Message reported when `required` fails
        #[arg(long, value_name = "MSG")]
        required_message: Option<String>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Validate a file selection
    Files {
        /// Files to select
        #[arg(num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Require at least one file
        #[arg(long)]
        required: bool,

        /// Message reported when `required` fails
        #[arg(long, value_name = "MSG")]
        required_message: Option<String>,
    },

    /// List the built-in presets
    #[command(alias = "ls")]
    Presets,
}

/// Transform flags shared by `transform` and `validate`. They are appended
/// to the configured field.
#[derive(Args, Debug, Default)]
pub struct PipelineArgs {
    /// Filter preset or /pattern/flags (repeatable)
    #[arg(short, long = "filter", value_name = "SPEC")]
    pub filters: Vec<String>,

    /// Modifier preset (repeatable)
    #[arg(short, long = "modifier", value_name = "SPEC")]
    pub modifiers: Vec<String>,

    /// Trim surrounding whitespace
    #[arg(long)]
    pub trim: bool,

    /// Lower-case the result
    #[arg(long)]
    pub lowercase: bool,

    /// Upper-case the result
    #[arg(long)]
    pub uppercase: bool,

    /// Keep only digits (plus --allow characters)
    #[arg(long)]
    pub numeric: bool,

    /// Extra characters a numeric value keeps
    #[arg(long, value_name = "CHARS")]
    pub allow: Option<String>,
}
