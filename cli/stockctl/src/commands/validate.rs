//! Validation command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use stockroom_custom_id::Format;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_output, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Identifiers to check.
    #[arg(required = true, value_name = "ID")]
    candidates: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ValidationRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "VALID")]
    pub valid: bool,
}

/// Check each candidate against the format.
pub fn check_candidates(format: &Format, candidates: &[String]) -> Result<Vec<ValidationRow>> {
    let matcher = format.matcher()?;
    Ok(candidates
        .iter()
        .map(|candidate| ValidationRow {
            id: candidate.clone(),
            valid: matcher.is_match(candidate),
        })
        .collect())
}

pub fn validate(ctx: CommandContext, args: ValidateArgs) -> Result<()> {
    let format = ctx.load_format()?;
    let rows = check_candidates(&format, &args.candidates)?;

    match ctx.format {
        OutputFormat::Json => print_output(&rows, OutputFormat::Json),
        OutputFormat::Table => {
            for row in &rows {
                let mark = if row.valid {
                    "valid".green()
                } else {
                    "invalid".red()
                };
                println!("{:<8} {}", mark, row.id);
            }
        }
    }

    let rejected = rows.iter().filter(|row| !row.valid).count();
    if rejected > 0 {
        return Err(CliError::Rejected {
            rejected,
            total: rows.len(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_custom_id::Element;

    #[test]
    fn test_check_candidates() {
        let format =
            Format::new(vec![Element::fixed_text("INV-", 0), Element::sequence(4, 1)]).unwrap();
        let candidates = vec![
            "INV-0007".to_string(),
            "INV-07".to_string(),
            "INV-00007".to_string(),
        ];
        let rows = check_candidates(&format, &candidates).unwrap();
        let valid: Vec<bool> = rows.iter().map(|row| row.valid).collect();
        assert_eq!(valid, vec![true, false, true]);
    }

    #[test]
    fn test_empty_format_accepts_all() {
        let rows = check_candidates(&Format::empty(), &["anything".to_string()]).unwrap();
        assert!(rows[0].valid);
    }
}
