//! CLI commands.

mod check;
mod config;
mod describe;
mod generate;
mod normalize;
mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stockroom_custom_id::Format;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// stockroom CLI - Preview, generate, and validate custom item ID formats.
#[derive(Debug, Parser)]
#[command(name = "stock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format [default: table, or the configured output].
    #[arg(long, short, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Format file (JSON array of element records).
    #[arg(long, global = true, env = "STOCK_FORMAT", value_name = "PATH")]
    format_file: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is not set.
    #[arg(long, global = true, env = "STOCK_LOG_LEVEL", value_name = "FILTER")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate identifiers for a range of counter values.
    Generate(generate::GenerateArgs),

    /// Show the identifier the next created item would receive.
    Preview(generate::PreviewArgs),

    /// Check identifiers against the format.
    Validate(validate::ValidateArgs),

    /// List the format's elements and recognition pattern.
    Describe,

    /// Rewrite sort orders as contiguous positions.
    Normalize(normalize::NormalizeArgs),

    /// Check the format's structural rules.
    Check,

    /// Show or change CLI configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        crate::logging::init(
            config.resolve_log_level(self.log_level.as_deref()),
            self.log_json,
        );

        let ctx = CommandContext {
            format: config.resolve_output(self.output),
            config,
            format_file: self.format_file,
        };

        match self.command {
            Commands::Generate(args) => generate::generate(ctx, args),
            Commands::Preview(args) => generate::preview(ctx, args),
            Commands::Validate(args) => validate::validate(ctx, args),
            Commands::Describe => describe::describe(ctx),
            Commands::Normalize(args) => normalize::normalize(ctx, args),
            Commands::Check => check::check(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("stock {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub format_file: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the format file, preferring flag/env over config.
    pub fn resolve_format_file(&self) -> Option<&Path> {
        self.format_file
            .as_deref()
            .or(self.config.format_file.as_deref())
    }

    /// Require a format file to be specified.
    pub fn require_format_file(&self) -> Result<&Path> {
        self.resolve_format_file()
            .ok_or_else(|| CliError::NoFormatFile.into())
    }

    /// Load and check the format.
    pub fn load_format(&self) -> Result<Format> {
        let path = self.require_format_file()?;
        let format = load_format_file(path)?;
        debug!(path = %path.display(), elements = format.len(), "loaded format");
        Ok(format)
    }
}

/// Read a format file.
pub fn load_format_file(path: &Path) -> Result<Format> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read format file {}", path.display()))?;
    Format::from_json(&contents)
        .with_context(|| format!("invalid format file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ctx(format_file: Option<PathBuf>, configured: Option<PathBuf>) -> CommandContext {
        CommandContext {
            config: Config {
                format_file: configured,
                ..Config::default()
            },
            format: OutputFormat::Table,
            format_file,
        }
    }

    #[test]
    fn test_flag_overrides_config() {
        let flagged = ctx(Some("flag.json".into()), Some("config.json".into()));
        assert_eq!(flagged.resolve_format_file(), Some(Path::new("flag.json")));

        let configured = ctx(None, Some("config.json".into()));
        assert_eq!(
            configured.resolve_format_file(),
            Some(Path::new("config.json"))
        );
    }

    #[test]
    fn test_output_flag_is_optional() {
        let cli = Cli::try_parse_from(["stock", "describe"]).unwrap();
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["stock", "-o", "json", "--log-level", "debug", "check"])
            .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_format_file() {
        let err = ctx(None, None).require_format_file().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoFormatFile)
        ));
    }

    #[test]
    fn test_load_format_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        std::fs::write(
            &path,
            r#"[{"elementType":"FIXED_TEXT","config":{"value":"INV-"},"sortOrder":0},
                {"elementType":"SEQUENCE","config":{"padding":4},"sortOrder":1}]"#,
        )
        .unwrap();

        let format = ctx(Some(path), None).load_format().unwrap();
        assert_eq!(format.generate(7), "INV-0007");
    }

    #[test]
    fn test_sample_format_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("formats/inventory.json");
        let format = load_format_file(&path).unwrap();
        assert_eq!(format.len(), 6);
        assert_eq!(format.sequence_position(), Some(3));
        assert!(format.validate(&format.generate(42)));
    }

    #[test]
    fn test_load_format_file_rejects_duplicate_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        std::fs::write(
            &path,
            r#"[{"elementType":"SEQUENCE","config":{},"sortOrder":0},
                {"elementType":"SEQUENCE","config":{},"sortOrder":1}]"#,
        )
        .unwrap();

        let err = load_format_file(&path).unwrap_err();
        let format_err = err
            .downcast_ref::<stockroom_custom_id::FormatError>()
            .unwrap();
        assert!(format_err.is_duplicate_sequence());
    }
}
