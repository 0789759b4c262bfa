//! Config commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::config::{config_path, DEFAULT_LOG_LEVEL};
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Config commands.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the current configuration.
    Show,

    /// Set the default format file.
    SetFormat {
        /// Path to the format file.
        path: PathBuf,
    },

    /// Set the default output format.
    SetOutput {
        /// Output format.
        #[arg(value_enum)]
        output: OutputFormat,
    },

    /// Set the default log filter (e.g. `info`, `stockroom_custom_id=debug`).
    SetLogLevel {
        /// Log filter directive.
        level: String,
    },
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetFormat { path } => set_format(ctx, path),
            ConfigSubcommand::SetOutput { output } => set_output(ctx, output),
            ConfigSubcommand::SetLogLevel { level } => set_log_level(ctx, level),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_single(&ctx.config),
        OutputFormat::Table => {
            let config = &ctx.config;
            let format_file = config
                .format_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string());
            let output = config
                .output
                .map(|o| o.as_str().to_string())
                .unwrap_or_else(|| format!("(not set, {})", OutputFormat::default().as_str()));
            let log_level = config
                .log_level
                .clone()
                .unwrap_or_else(|| format!("(not set, {DEFAULT_LOG_LEVEL})"));
            println!("format_file: {format_file}");
            println!("output:      {output}");
            println!("log_level:   {log_level}");
            if let Ok(path) = config_path() {
                print_info(&format!("config file: {}", path.display()));
            }
        }
    }
    Ok(())
}

fn set_format(ctx: CommandContext, path: PathBuf) -> Result<()> {
    let path = path
        .canonicalize()
        .with_context(|| format!("format file not found: {}", path.display()))?;
    super::load_format_file(&path)?;

    let mut config = ctx.config;
    config.format_file = Some(path.clone());
    config.save()?;

    print_success(&format!("Default format file set to {}", path.display()));
    Ok(())
}

fn set_output(ctx: CommandContext, output: OutputFormat) -> Result<()> {
    let mut config = ctx.config;
    config.output = Some(output);
    config.save()?;

    print_success(&format!("Default output format set to {}", output.as_str()));
    Ok(())
}

fn set_log_level(ctx: CommandContext, level: String) -> Result<()> {
    let mut config = ctx.config;
    config.log_level = Some(level.clone());
    config.save()?;

    print_success(&format!("Default log level set to {level}"));
    Ok(())
}
