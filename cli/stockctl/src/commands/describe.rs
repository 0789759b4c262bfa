//! Describe command.

use anyhow::Result;
use serde::Serialize;
use stockroom_custom_id::{ordering, pattern, Format};
use tabled::Tabled;

use crate::output::{print_info, print_output, print_single, OutputFormat};

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
pub struct ElementRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "SORT ORDER")]
    pub sort_order: i64,
    #[tabled(rename = "TYPE")]
    pub element_type: String,
    #[tabled(rename = "CONFIG")]
    pub config: String,
    #[tabled(rename = "PATTERN")]
    pub pattern: String,
}

/// One row per element, in rendering order.
pub fn describe_rows(format: &Format) -> Vec<ElementRow> {
    ordering::sorted(format.elements())
        .into_iter()
        .enumerate()
        .map(|(position, element)| ElementRow {
            position,
            sort_order: element.sort_order,
            element_type: element.element_type().to_string(),
            config: element.kind.to_config().to_string(),
            pattern: pattern::render(&pattern::fragment(&element.kind)),
        })
        .collect()
}

pub fn describe(ctx: CommandContext) -> Result<()> {
    let format = ctx.load_format()?;
    let rows = describe_rows(&format);
    let source = pattern::pattern_source(format.elements());

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({
            "elements": rows,
            "pattern": source,
        })),
        OutputFormat::Table => {
            print_output(&rows, OutputFormat::Table);
            match source {
                Some(source) => print_info(&format!("pattern: {source}")),
                None => print_info("no elements: identifiers fall back to random UUIDs"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_custom_id::{Element, ElementType};

    #[test]
    fn test_describe_rows_in_rendering_order() {
        let format = Format::new(vec![
            Element::sequence(4, 3),
            Element::fixed_text("INV-", 1),
            Element::of(ElementType::Random20Bit, 2),
        ])
        .unwrap();
        let rows = describe_rows(&format);

        let types: Vec<&str> = rows.iter().map(|r| r.element_type.as_str()).collect();
        assert_eq!(types, vec!["FIXED_TEXT", "RANDOM_20BIT", "SEQUENCE"]);
        assert_eq!(rows[0].pattern, r"INV\-");
        assert_eq!(rows[0].config, r#"{"value":"INV-"}"#);
        assert_eq!(rows[2].pattern, "[0-9]{4,}");
        assert_eq!(rows[2].position, 2);
        assert_eq!(rows[2].sort_order, 3);
    }
}
