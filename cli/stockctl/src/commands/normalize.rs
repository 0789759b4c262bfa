//! Normalize command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use stockroom_custom_id::Format;
use tracing::debug;

use crate::output::{print_info, print_success};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Rewrite the format file in place instead of printing.
    #[arg(long)]
    write: bool,
}

/// What `normalize_file` did with the format file.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The canonical JSON, not written anywhere.
    Printed(String),
    /// The file already held the canonical JSON.
    Unchanged,
    /// The file was rewritten; carries the element count.
    Rewritten(usize),
}

/// Normalizes the format file at `path`.
///
/// The file is compared as text against the canonical encoding, so
/// clamped padding, dropped unknown config keys and reordered records all
/// count as changes.
pub fn normalize_file(path: &Path, write: bool) -> Result<Outcome> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read format file {}", path.display()))?;
    let format = Format::from_json(&contents)
        .with_context(|| format!("invalid format file {}", path.display()))?;
    let json = format.to_json()?;
    debug!(path = %path.display(), elements = format.len(), "normalizing format");

    if !write {
        return Ok(Outcome::Printed(json));
    }
    if contents.trim_end() == json {
        return Ok(Outcome::Unchanged);
    }

    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write format file {}", path.display()))?;
    Ok(Outcome::Rewritten(format.len()))
}

pub fn normalize(ctx: CommandContext, args: NormalizeArgs) -> Result<()> {
    let path = ctx.require_format_file()?;

    match normalize_file(path, args.write)? {
        Outcome::Printed(json) => println!("{json}"),
        Outcome::Unchanged => {
            print_info(&format!("{} is already normalized", path.display()));
        }
        Outcome::Rewritten(elements) => print_success(&format!(
            "Normalized {elements} element(s) in {}",
            path.display()
        )),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const UNSORTED: &str = r#"[
        {"elementType":"SEQUENCE","config":{"padding":42},"sortOrder":20},
        {"elementType":"FIXED_TEXT","config":{"value":"INV-"},"sortOrder":-3}
    ]"#;

    #[test]
    fn test_print_mode_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        std::fs::write(&path, UNSORTED).unwrap();

        let Outcome::Printed(json) = normalize_file(&path, false).unwrap() else {
            panic!("expected printed output");
        };
        let format = Format::from_json(&json).unwrap();
        assert_eq!(format.elements()[0].sort_order, 0);
        assert_eq!(format.generate(7), "INV-0000000007");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), UNSORTED);
    }

    #[test]
    fn test_write_rewrites_non_canonical_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        std::fs::write(&path, UNSORTED).unwrap();

        assert_eq!(normalize_file(&path, true).unwrap(), Outcome::Rewritten(2));
        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains(r#""padding": 10"#));
        assert!(rewritten.ends_with('\n'));

        assert_eq!(normalize_file(&path, true).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn test_write_detects_clamped_padding_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        // Already ordered and contiguous; only the padding is out of range.
        std::fs::write(
            &path,
            r#"[{"elementType":"SEQUENCE","config":{"padding":42},"sortOrder":0}]"#,
        )
        .unwrap();

        assert_eq!(normalize_file(&path, true).unwrap(), Outcome::Rewritten(1));
    }

    #[test]
    fn test_write_keeps_canonical_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("format.json");
        let canonical = format!("{}\n", Format::from_json(UNSORTED).unwrap().to_json().unwrap());
        std::fs::write(&path, &canonical).unwrap();

        assert_eq!(normalize_file(&path, true).unwrap(), Outcome::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), canonical);
    }
}
