//! # stockroom-custom-id
//!
//! Custom item identifier formats for stockroom inventories.
//!
//! ## Design Principles
//!
//! - A format is an ordered list of typed elements; order comes from
//!   `sort_order`, ties keep input order
//! - Generation and validation share one ordering and one type dispatch, so
//!   every generated identifier validates against its own format
//! - Generation and validation are total: bad configuration falls back to
//!   defaults, an uncompilable pattern rejects the candidate
//! - Randomness and the calendar date are injected through [`RandSource`]
//!   and [`Clock`]
//!
//! ## Example
//!
//! ```
//! use stockroom_custom_id::{generate, validate, Element};
//!
//! let format = vec![Element::fixed_text("INV-", 0), Element::sequence(4, 1)];
//!
//! assert_eq!(generate(&format, 7), "INV-0007");
//! assert!(validate("INV-0007", &format));
//! assert!(!validate("INV-07", &format));
//! ```
//!
//! ## Counters
//!
//! The counter value fed to sequence elements is owned by the caller and
//! must be incremented atomically per inventory. Random elements may
//! collide; retrying on a storage uniqueness violation is the caller's job.

pub mod clock;
pub mod datetime;
mod element;
mod error;
mod format;
mod generator;
pub mod ordering;
pub mod pattern;
pub mod random;
mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use element::*;
pub use error::FormatError;
pub use format::{check_elements, Format};
pub use generator::{generate, Generator};
pub use ordering::normalize;
pub use random::{RandSource, SeededRandom, ThreadRandom};
pub use validator::{validate, FormatMatcher, Validator, DEFAULT_SIZE_LIMIT};
