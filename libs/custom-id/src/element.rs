//! Format elements and their per-type configuration.
//!
//! An element is one position in a custom ID format. The configuration is
//! carried by the [`ElementKind`] variant itself, so each type only has the
//! fields it uses.
//!
//! The persisted shape is a flat record:
//!
//! ```text
//! { "elementType": "SEQUENCE", "config": { "padding": 4 }, "sortOrder": 1 }
//! ```
//!
//! Decoding the `config` object is lenient: missing, mistyped, or
//! out-of-range fields fall back to the type defaults instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::FormatError;

/// Default token string for date elements.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY";

/// The closed set of element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "FIXED_TEXT")]
    FixedText,
    #[serde(rename = "RANDOM_20BIT")]
    Random20Bit,
    #[serde(rename = "RANDOM_32BIT")]
    Random32Bit,
    #[serde(rename = "RANDOM_6DIGIT")]
    Random6Digit,
    #[serde(rename = "RANDOM_9DIGIT")]
    Random9Digit,
    #[serde(rename = "GUID")]
    Guid,
    #[serde(rename = "DATETIME")]
    DateTime,
    #[serde(rename = "SEQUENCE")]
    Sequence,
}

impl ElementType {
    /// All element types, in editor order.
    pub const ALL: [ElementType; 8] = [
        ElementType::FixedText,
        ElementType::Random20Bit,
        ElementType::Random32Bit,
        ElementType::Random6Digit,
        ElementType::Random9Digit,
        ElementType::Guid,
        ElementType::DateTime,
        ElementType::Sequence,
    ];

    /// Returns the persisted name of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::FixedText => "FIXED_TEXT",
            ElementType::Random20Bit => "RANDOM_20BIT",
            ElementType::Random32Bit => "RANDOM_32BIT",
            ElementType::Random6Digit => "RANDOM_6DIGIT",
            ElementType::Random9Digit => "RANDOM_9DIGIT",
            ElementType::Guid => "GUID",
            ElementType::DateTime => "DATETIME",
            ElementType::Sequence => "SEQUENCE",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ElementType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| format!("unknown element type '{s}'"))
    }
}

/// Zero-padding width for sequence elements, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Padding(u8);

impl Padding {
    /// Smallest accepted padding.
    pub const MIN: u8 = 1;

    /// Largest accepted padding.
    pub const MAX: u8 = 10;

    /// Padding used when none is configured.
    pub const DEFAULT: Self = Self(1);

    /// Creates a padding, rejecting values outside the accepted range.
    pub fn new(value: i64) -> Result<Self, FormatError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(FormatError::InvalidPadding {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Creates a padding, clamping out-of-range values into the accepted range.
    #[must_use]
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    /// Returns the minimum number of digits.
    #[must_use]
    pub const fn width(self) -> usize {
        self.0 as usize
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An element type together with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Literal text.
    FixedText { value: String },
    /// Five hex digits.
    Random20Bit,
    /// Eight hex digits.
    Random32Bit,
    /// A decimal number in `100000..=999999`.
    Random6Digit,
    /// A decimal number in `100000000..=999999999`.
    Random9Digit,
    /// A random version 4 UUID.
    Guid,
    /// The current date, rendered through a `YYYY`/`MM`/`DD` token string.
    DateTime { format: String },
    /// The caller-supplied counter value, zero padded.
    Sequence { padding: Padding },
}

impl ElementKind {
    /// Returns the kind for `ty` with every field at its type default.
    pub fn with_defaults(ty: ElementType) -> Self {
        match ty {
            ElementType::FixedText => ElementKind::FixedText {
                value: String::new(),
            },
            ElementType::Random20Bit => ElementKind::Random20Bit,
            ElementType::Random32Bit => ElementKind::Random32Bit,
            ElementType::Random6Digit => ElementKind::Random6Digit,
            ElementType::Random9Digit => ElementKind::Random9Digit,
            ElementType::Guid => ElementKind::Guid,
            ElementType::DateTime => ElementKind::DateTime {
                format: DEFAULT_DATE_FORMAT.to_string(),
            },
            ElementType::Sequence => ElementKind::Sequence {
                padding: Padding::DEFAULT,
            },
        }
    }

    /// Returns the kind a format editor starts with when `ty` is added.
    ///
    /// Same as [`ElementKind::with_defaults`] except that new sequences are
    /// padded to four digits.
    pub fn for_editor(ty: ElementType) -> Self {
        match ty {
            ElementType::Sequence => ElementKind::Sequence {
                padding: Padding(4),
            },
            other => Self::with_defaults(other),
        }
    }

    /// Returns the element type of this kind.
    pub const fn element_type(&self) -> ElementType {
        match self {
            ElementKind::FixedText { .. } => ElementType::FixedText,
            ElementKind::Random20Bit => ElementType::Random20Bit,
            ElementKind::Random32Bit => ElementType::Random32Bit,
            ElementKind::Random6Digit => ElementType::Random6Digit,
            ElementKind::Random9Digit => ElementType::Random9Digit,
            ElementKind::Guid => ElementType::Guid,
            ElementKind::DateTime { .. } => ElementType::DateTime,
            ElementKind::Sequence { .. } => ElementType::Sequence,
        }
    }

    /// Returns true if this is a sequence element.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, ElementKind::Sequence { .. })
    }

    /// Decodes a kind from its type and a loosely-typed config object.
    pub fn from_config(ty: ElementType, config: &Value) -> Self {
        match ty {
            ElementType::FixedText => ElementKind::FixedText {
                value: config_str(config, "value").unwrap_or_default().to_string(),
            },
            ElementType::DateTime => ElementKind::DateTime {
                format: config_str(config, "format")
                    .filter(|format| !format.is_empty())
                    .unwrap_or(DEFAULT_DATE_FORMAT)
                    .to_string(),
            },
            ElementType::Sequence => ElementKind::Sequence {
                padding: config_int(config, "padding")
                    .map(Padding::saturating)
                    .unwrap_or_default(),
            },
            other => Self::with_defaults(other),
        }
    }

    /// Encodes the config object for this kind.
    pub fn to_config(&self) -> Value {
        match self {
            ElementKind::FixedText { value } => json!({ "value": value }),
            ElementKind::DateTime { format } => json!({ "format": format }),
            ElementKind::Sequence { padding } => json!({ "padding": padding.width() }),
            _ => json!({}),
        }
    }
}

fn config_str<'a>(config: &'a Value, key: &str) -> Option<&'a str> {
    config.get(key)?.as_str()
}

fn config_int(config: &Value, key: &str) -> Option<i64> {
    let value = config.get(key)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

/// One position in a format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ElementRecord", into = "ElementRecord")]
pub struct Element {
    /// Type and configuration.
    pub kind: ElementKind,
    /// Rendering and matching position; lower comes first.
    pub sort_order: i64,
    /// Opaque storage identity, carried through untouched.
    pub id: Option<String>,
}

impl Element {
    /// Creates an element with no storage identity.
    pub fn new(kind: ElementKind, sort_order: i64) -> Self {
        Self {
            kind,
            sort_order,
            id: None,
        }
    }

    /// Creates an element of type `ty` with default configuration.
    pub fn of(ty: ElementType, sort_order: i64) -> Self {
        Self::new(ElementKind::with_defaults(ty), sort_order)
    }

    pub fn fixed_text(value: impl Into<String>, sort_order: i64) -> Self {
        Self::new(
            ElementKind::FixedText {
                value: value.into(),
            },
            sort_order,
        )
    }

    pub fn date_time(format: impl Into<String>, sort_order: i64) -> Self {
        Self::new(
            ElementKind::DateTime {
                format: format.into(),
            },
            sort_order,
        )
    }

    /// Creates a sequence element; `padding` is clamped into range.
    pub fn sequence(padding: i64, sort_order: i64) -> Self {
        Self::new(
            ElementKind::Sequence {
                padding: Padding::saturating(padding),
            },
            sort_order,
        )
    }

    /// Returns the element type.
    pub const fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }
}

/// The persisted representation of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub element_type: ElementType,
    #[serde(default)]
    pub config: Value,
    pub sort_order: i64,
}

impl From<ElementRecord> for Element {
    fn from(record: ElementRecord) -> Self {
        Self {
            kind: ElementKind::from_config(record.element_type, &record.config),
            sort_order: record.sort_order,
            id: record.id,
        }
    }
}

impl From<Element> for ElementRecord {
    fn from(element: Element) -> Self {
        Self {
            id: element.id,
            element_type: element.kind.element_type(),
            config: element.kind.to_config(),
            sort_order: element.sort_order,
        }
    }
}
