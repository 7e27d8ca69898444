use clap::Parser;
use colored::*;
use inputkit::commands::{self, CmdMessage, CmdResult, MessageLevel, PresetInfo};
use inputkit::config::{FieldConfig, InputkitConfig};
use inputkit::error::Result;
use std::io::Read;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod logging;
use args::{Cli, Commands, PipelineArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    config: InputkitConfig,
    json: bool,
    strict: bool,
}

/// Returns whether the input was valid.
fn run(cli: Cli) -> Result<bool> {
    let ctx = init_context(&cli)?;

    let result = match cli.command {
        Commands::Transform { value, pipeline } => {
            let field = merge_field(&ctx.config.field, &pipeline, &[], None);
            commands::transform::run(&field, &read_value(value)?, ctx.strict)?
        }
        Commands::Validate {
            value,
            validators,
            required,
            required_message,
            pipeline,
        } => {
            let validators = with_required(validators, required);
            let field = merge_field(
                &ctx.config.field,
                &pipeline,
                &validators,
                required_message,
            );
            commands::validate::run(&field, &read_value(value)?, ctx.strict)?
        }
        Commands::Files {
            paths,
            required,
            required_message,
        } => handle_files(&ctx, paths, required, required_message)?,
        Commands::Presets => commands::presets::run(),
    };

    print_result(&ctx, &result)?;
    Ok(result.is_valid())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = InputkitConfig::load(cli.config.as_deref())?;
    Ok(AppContext {
        json: cli.json || config.json,
        strict: cli.strict || config.strict,
        config,
    })
}

fn handle_files(
    ctx: &AppContext,
    paths: Vec<PathBuf>,
    required: bool,
    required_message: Option<String>,
) -> Result<CmdResult> {
    let validators = with_required(ctx.config.field.validators.clone(), required);
    let required_message =
        required_message.or_else(|| ctx.config.field.required_message.clone());
    commands::files::run(&paths, &validators, required_message.as_deref(), ctx.strict)
}

fn with_required(mut validators: Vec<String>, required: bool) -> Vec<String> {
    if required {
        validators.push("required".to_string());
    }
    validators
}

/// Command-line specs go after the configured ones; flags only switch on.
fn merge_field(
    base: &FieldConfig,
    pipeline: &PipelineArgs,
    validators: &[String],
    required_message: Option<String>,
) -> FieldConfig {
    let mut field = base.clone();
    field.filters.extend(pipeline.filters.iter().cloned());
    field.modifiers.extend(pipeline.modifiers.iter().cloned());
    field.validators.extend(validators.iter().cloned());
    field.trim |= pipeline.trim;
    field.lowercase |= pipeline.lowercase;
    field.uppercase |= pipeline.uppercase;
    field.numeric |= pipeline.numeric;
    if let Some(allow) = &pipeline.allow {
        field.allow = allow.clone();
    }
    if required_message.is_some() {
        field.required_message = required_message;
    }
    field
}

/// `-` reads the value from stdin, without the trailing newline.
fn read_value(value: String) -> Result<String> {
    if value != "-" {
        return Ok(value);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(buffer.as_str());
    Ok(trimmed.to_string())
}

fn print_result(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    print_messages(&result.messages);

    if !result.presets.is_empty() {
        print_presets(&result.presets);
    }
    for file in &result.files {
        let mime = file.mime.as_deref().unwrap_or("-");
        println!("{}  {} bytes  {}", file.name.bold(), file.size, mime.dimmed());
    }
    if let Some(value) = &result.value {
        println!("{}", value);
    }
    if let Some(validation) = &result.validation {
        if validation.valid {
            println!("{}", "valid".green());
        } else {
            println!("{}", "invalid".red());
            for message in &validation.failed {
                println!("  {}", message.red());
            }
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_presets(presets: &[PresetInfo]) {
    let name_width = presets
        .iter()
        .map(|preset| preset.name.width())
        .max()
        .unwrap_or(0);

    for preset in presets {
        let kind = format!("{:<10}", preset.kind.to_string());
        let padding = " ".repeat(name_width - preset.name.width());
        println!(
            "{} {}{}  {}",
            kind.dimmed(),
            preset.name.bold(),
            padding,
            preset.description
        );
    }
}
