//! Recognition patterns for element lists.
//!
//! Each element contributes a short list of typed [`Node`]s. Nodes are
//! turned into regex syntax in one place, [`render`], so escaping of fixed
//! text and date literals is handled once.

use crate::datetime::{self, DateToken};
use crate::{ordering, Element, ElementKind};

/// Textual pattern matching a version 1-5 UUID with the RFC 4122 variant.
const UUID_PATTERN: &str =
    "[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[1-5][0-9A-Fa-f]{3}-[89ABab][0-9A-Fa-f]{3}-[0-9A-Fa-f]{12}";

/// One unit of a recognition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text matched verbatim.
    Literal(String),
    /// Exactly this many hex digits, either case.
    Hex(usize),
    /// Exactly this many ASCII digits.
    Digits(usize),
    /// At least this many ASCII digits, with no upper bound.
    DigitsAtLeast(usize),
    /// A hyphenated UUID.
    Uuid,
}

/// Returns the nodes recognizing one element.
pub fn fragment(kind: &ElementKind) -> Vec<Node> {
    match kind {
        ElementKind::FixedText { value } => vec![Node::Literal(value.clone())],
        ElementKind::Random20Bit => vec![Node::Hex(5)],
        ElementKind::Random32Bit => vec![Node::Hex(8)],
        ElementKind::Random6Digit => vec![Node::Digits(6)],
        ElementKind::Random9Digit => vec![Node::Digits(9)],
        ElementKind::Guid => vec![Node::Uuid],
        ElementKind::DateTime { format } => datetime::tokenize(format)
            .into_iter()
            .map(|token| match token {
                DateToken::Year => Node::Digits(4),
                DateToken::Month | DateToken::Day => Node::Digits(2),
                DateToken::Literal(text) => Node::Literal(text),
            })
            .collect(),
        // No upper bound: any counter wider than the padding is accepted.
        ElementKind::Sequence { padding } => vec![Node::DigitsAtLeast(padding.width())],
    }
}

/// Returns the nodes for a whole element list, in sort order.
pub fn nodes(elements: &[Element]) -> Vec<Node> {
    ordering::sorted(elements)
        .into_iter()
        .flat_map(|element| fragment(&element.kind))
        .collect()
}

/// Renders nodes to regex syntax, without anchors.
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(&regex::escape(text)),
            Node::Hex(n) => out.push_str(&format!("[0-9A-Fa-f]{{{n}}}")),
            Node::Digits(n) => out.push_str(&format!("[0-9]{{{n}}}")),
            Node::DigitsAtLeast(min) => out.push_str(&format!("[0-9]{{{min},}}")),
            Node::Uuid => out.push_str(UUID_PATTERN),
        }
    }
    out
}

/// Returns the full anchored pattern for an element list.
///
/// Returns `None` for an empty list, which accepts every candidate.
pub fn pattern_source(elements: &[Element]) -> Option<String> {
    if elements.is_empty() {
        return None;
    }
    Some(format!("^(?:{})$", render(&nodes(elements))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_text_is_escaped() {
        let nodes = fragment(&ElementKind::FixedText {
            value: "A.B*".to_string(),
        });
        assert_eq!(render(&nodes), r"A\.B\*");
    }

    #[test]
    fn test_escapes_every_metacharacter() {
        let text = r".*+?^${}()|[]\";
        let rendered = render(&[Node::Literal(text.to_string())]);
        let regex = regex::Regex::new(&format!("^{rendered}$")).unwrap();
        assert!(regex.is_match(text));
    }

    #[test]
    fn test_date_time_tokens() {
        let nodes = fragment(&ElementKind::DateTime {
            format: "YYYY.MM/DD".to_string(),
        });
        assert_eq!(render(&nodes), r"[0-9]{4}\.[0-9]{2}/[0-9]{2}");
    }

    #[test]
    fn test_sequence_is_open_ended() {
        let nodes = fragment(&ElementKind::Sequence {
            padding: crate::Padding::saturating(4),
        });
        assert_eq!(render(&nodes), "[0-9]{4,}");
    }

    #[test]
    fn test_random_fragments() {
        assert_eq!(render(&fragment(&ElementKind::Random20Bit)), "[0-9A-Fa-f]{5}");
        assert_eq!(render(&fragment(&ElementKind::Random32Bit)), "[0-9A-Fa-f]{8}");
        assert_eq!(render(&fragment(&ElementKind::Random6Digit)), "[0-9]{6}");
        assert_eq!(render(&fragment(&ElementKind::Random9Digit)), "[0-9]{9}");
        assert_eq!(render(&fragment(&ElementKind::Guid)), UUID_PATTERN);
    }

    #[test]
    fn test_only_sequence_is_open_ended() {
        assert_eq!(fragment(&ElementKind::Random6Digit), vec![Node::Digits(6)]);
        assert_eq!(
            fragment(&ElementKind::Sequence {
                padding: crate::Padding::saturating(3),
            }),
            vec![Node::DigitsAtLeast(3)]
        );
        assert_eq!(
            fragment(&ElementKind::DateTime {
                format: "YYYYMM".to_string(),
            }),
            vec![Node::Digits(4), Node::Digits(2)]
        );
    }

    #[test]
    fn test_pattern_source_is_anchored_and_ordered() {
        let elements = vec![Element::sequence(4, 1), Element::fixed_text("INV-", 0)];
        assert_eq!(
            pattern_source(&elements).unwrap(),
            r"^(?:INV\-[0-9]{4,})$"
        );
        assert!(pattern_source(&[]).is_none());
    }
}
