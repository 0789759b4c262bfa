//! Generation commands.
//!
//! The CLI has no access to an inventory's live counter; counter values are
//! passed explicitly.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use stockroom_custom_id::{Format, Generator};
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Counter value for the first identifier.
    #[arg(long, default_value_t = 1)]
    counter: u64,

    /// Number of identifiers to generate, with consecutive counter values.
    #[arg(long, default_value_t = 1)]
    count: u64,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// The inventory's current counter value.
    #[arg(long, default_value_t = 0)]
    current: u64,
}

#[derive(Debug, Serialize, Tabled)]
pub struct GeneratedId {
    #[tabled(rename = "COUNTER")]
    pub counter: u64,
    #[tabled(rename = "ID")]
    pub id: String,
}

/// Generate `count` identifiers starting at `counter`.
pub fn generate_ids(format: &Format, counter: u64, count: u64) -> Vec<GeneratedId> {
    let mut generator = Generator::new();
    (0..count)
        .map_while(|offset| counter.checked_add(offset))
        .map(|counter| GeneratedId {
            counter,
            id: format.generate_with(&mut generator, counter),
        })
        .collect()
}

pub fn generate(ctx: CommandContext, args: GenerateArgs) -> Result<()> {
    let format = ctx.load_format()?;
    let ids = generate_ids(&format, args.counter, args.count);
    print_output(&ids, ctx.format);
    Ok(())
}

pub fn preview(ctx: CommandContext, args: PreviewArgs) -> Result<()> {
    let format = ctx.load_format()?;
    let id = format.preview(args.current);

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({
            "current": args.current,
            "preview": id,
        })),
        OutputFormat::Table => println!("{id}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_custom_id::Element;

    fn inv_format() -> Format {
        Format::new(vec![Element::fixed_text("INV-", 0), Element::sequence(4, 1)]).unwrap()
    }

    #[test]
    fn test_generate_ids_consecutive_counters() {
        let ids = generate_ids(&inv_format(), 9, 3);
        let rendered: Vec<&str> = ids.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(rendered, vec!["INV-0009", "INV-0010", "INV-0011"]);
        assert_eq!(ids[2].counter, 11);
    }

    #[test]
    fn test_generate_ids_stops_at_counter_overflow() {
        let ids = generate_ids(&inv_format(), u64::MAX - 1, 5);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_generate_ids_zero_count() {
        assert!(generate_ids(&inv_format(), 1, 0).is_empty());
    }
}
