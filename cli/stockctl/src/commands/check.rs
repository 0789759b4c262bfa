//! Check command.
//!
//! Loading a format already enforces the single-sequence rule; this command
//! also reports layouts whose validation is ambiguous.

use anyhow::Result;
use stockroom_custom_id::pattern::{self, Node};
use stockroom_custom_id::{ordering, Format};
use tracing::warn;

use crate::output::{print_info, print_single, print_success, print_warning, OutputFormat};

use super::CommandContext;

/// Returns the rendering position of an element that directly follows the
/// sequence and can start with a digit.
///
/// The sequence pattern has no upper bound, so such an element's digits can
/// be absorbed by the sequence during validation.
pub fn digit_after_sequence(format: &Format) -> Option<usize> {
    let ordered = ordering::sorted(format.elements());
    let sequence = ordered.iter().position(|element| element.kind.is_sequence())?;

    for (position, element) in ordered.iter().enumerate().skip(sequence + 1) {
        let nodes = pattern::fragment(&element.kind);
        match nodes.into_iter().find(|node| !is_empty_literal(node)) {
            None => continue,
            Some(Node::Literal(text)) => {
                return text
                    .starts_with(|c: char| c.is_ascii_digit())
                    .then_some(position);
            }
            Some(Node::Hex(_) | Node::Digits(_) | Node::DigitsAtLeast(_) | Node::Uuid) => {
                return Some(position);
            }
        }
    }
    None
}

fn is_empty_literal(node: &Node) -> bool {
    matches!(node, Node::Literal(text) if text.is_empty())
}

pub fn check(ctx: CommandContext) -> Result<()> {
    let format = ctx.load_format()?;
    let ambiguous = digit_after_sequence(&format);
    if let Some(position) = ambiguous {
        warn!(position, "element directly after the sequence can start with a digit");
    }

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({
            "valid": true,
            "elements": format.len(),
            "sequence_position": format.sequence_position(),
            "ambiguous_after_sequence": ambiguous,
            "pattern": pattern::pattern_source(format.elements()),
        })),
        OutputFormat::Table => {
            print_success(&format!("Format is valid ({} element(s))", format.len()));
            if let Some(position) = format.sequence_position() {
                print_info(&format!("sequence at position {position}"));
            }
            if let Some(position) = ambiguous {
                print_warning(&format!(
                    "element {position} directly follows the sequence and can start with a digit; \
                     validation may accept identifiers split differently than generated"
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_custom_id::{Element, ElementType};

    fn format(elements: Vec<Element>) -> Format {
        Format::new(elements).unwrap()
    }

    #[test]
    fn test_digit_after_sequence() {
        let f = format(vec![
            Element::sequence(3, 0),
            Element::of(ElementType::Random6Digit, 1),
        ]);
        assert_eq!(digit_after_sequence(&f), Some(1));
    }

    #[test]
    fn test_separator_after_sequence() {
        let f = format(vec![
            Element::sequence(3, 0),
            Element::fixed_text("-", 1),
            Element::of(ElementType::Random6Digit, 2),
        ]);
        assert_eq!(digit_after_sequence(&f), None);
    }

    #[test]
    fn test_numeric_text_after_sequence() {
        let f = format(vec![
            Element::sequence(3, 0),
            Element::fixed_text("5", 1),
        ]);
        assert_eq!(digit_after_sequence(&f), Some(1));

        let f = format(vec![
            Element::sequence(3, 0),
            Element::fixed_text("A5", 1),
        ]);
        assert_eq!(digit_after_sequence(&f), None);
    }

    #[test]
    fn test_empty_text_does_not_separate() {
        let f = format(vec![
            Element::sequence(3, 0),
            Element::fixed_text("", 1),
            Element::date_time("YYYY", 2),
        ]);
        assert_eq!(digit_after_sequence(&f), Some(2));
    }

    #[test]
    fn test_no_sequence() {
        let f = format(vec![Element::of(ElementType::Random9Digit, 0)]);
        assert_eq!(digit_after_sequence(&f), None);
    }
}
