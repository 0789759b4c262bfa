//! Token strings for date elements.
//!
//! A date format such as `YYYY-MM-DD` is scanned left to right into
//! year, month, day, and literal tokens. Both rendering and pattern
//! derivation work from the same token list.

use chrono::{Datelike, NaiveDate};

/// One piece of a date format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// `YYYY`: four-digit year.
    Year,
    /// `MM`: two-digit month.
    Month,
    /// `DD`: two-digit day of month.
    Day,
    /// Any other run of characters, taken literally.
    Literal(String),
}

/// Splits a date format into tokens.
///
/// Every occurrence of `YYYY`, `MM`, and `DD` is a token; everything else
/// accumulates into literals.
pub fn tokenize(format: &str) -> Vec<DateToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = format;

    while let Some(c) = rest.chars().next() {
        let token = if rest.starts_with("YYYY") {
            Some((DateToken::Year, 4))
        } else if rest.starts_with("MM") {
            Some((DateToken::Month, 2))
        } else if rest.starts_with("DD") {
            Some((DateToken::Day, 2))
        } else {
            None
        };

        match token {
            Some((token, len)) => {
                if !literal.is_empty() {
                    tokens.push(DateToken::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token);
                rest = &rest[len..];
            }
            None => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(DateToken::Literal(literal));
    }
    tokens
}

/// Renders `date` through a date format.
pub fn render(format: &str, date: NaiveDate) -> String {
    let mut out = String::with_capacity(format.len() + 4);
    for token in tokenize(format) {
        match token {
            DateToken::Year => out.push_str(&format!("{:04}", date.year())),
            DateToken::Month => out.push_str(&format!("{:02}", date.month())),
            DateToken::Day => out.push_str(&format!("{:02}", date.day())),
            DateToken::Literal(text) => out.push_str(&text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_tokenize_iso_date() {
        assert_eq!(
            tokenize("YYYY-MM-DD"),
            vec![
                DateToken::Year,
                DateToken::Literal("-".to_string()),
                DateToken::Month,
                DateToken::Literal("-".to_string()),
                DateToken::Day,
            ]
        );
    }

    #[test]
    fn test_tokenize_literal_only() {
        assert_eq!(tokenize("Q4"), vec![DateToken::Literal("Q4".to_string())]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_repeated_tokens() {
        assert_eq!(tokenize("MMMM"), vec![DateToken::Month, DateToken::Month]);
        assert_eq!(tokenize("YYY"), vec![DateToken::Literal("YYY".to_string())]);
    }

    #[test]
    fn test_render_pads_month_and_day() {
        assert_eq!(render("YYYYMMDD", date(2026, 3, 9)), "20260309");
        assert_eq!(render("DD/MM/YYYY", date(2026, 12, 31)), "31/12/2026");
        assert_eq!(render("YYYY", date(987, 1, 1)), "0987");
    }

    #[test]
    fn test_render_keeps_non_ascii_literals() {
        assert_eq!(render("年YYYY", date(2026, 1, 1)), "年2026");
    }
}
