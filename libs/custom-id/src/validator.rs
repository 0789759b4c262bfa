//! Identifier validation.
//!
//! A candidate conforms to an element list when it fully matches the
//! anchored pattern built by [`crate::pattern`]. An empty element list
//! accepts everything, mirroring the generator's UUID fallback.

use regex::{Regex, RegexBuilder};
use tracing::{debug, error};

use crate::{pattern, Element, FormatError};

/// Default limit on the compiled size of a recognition pattern, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled recognizer for one element list.
#[derive(Debug, Clone)]
pub struct FormatMatcher {
    regex: Option<Regex>,
}

impl FormatMatcher {
    /// Compiles a matcher with the default size limit.
    pub fn compile(elements: &[Element]) -> Result<Self, FormatError> {
        Validator::default().compile(elements)
    }

    /// Returns true if `candidate` conforms to the format.
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(candidate),
            None => true,
        }
    }

    /// Returns the anchored pattern, or `None` when every candidate is accepted.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// Validates candidates against element lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    size_limit: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limit on the compiled pattern size.
    #[must_use]
    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Compiles the recognizer for `elements`.
    pub fn compile(&self, elements: &[Element]) -> Result<FormatMatcher, FormatError> {
        let Some(source) = pattern::pattern_source(elements) else {
            return Ok(FormatMatcher { regex: None });
        };

        let regex = RegexBuilder::new(&source)
            .size_limit(self.size_limit)
            .build()?;
        Ok(FormatMatcher { regex: Some(regex) })
    }

    /// Returns true if `candidate` conforms to `elements`.
    ///
    /// Never fails: a pattern that does not compile is logged and the
    /// candidate is rejected.
    pub fn validate(&self, candidate: &str, elements: &[Element]) -> bool {
        match self.compile(elements) {
            Ok(matcher) => {
                let valid = matcher.is_match(candidate);
                debug!(elements = elements.len(), valid, "validated custom id");
                valid
            }
            Err(e) => {
                error!(error = %e, elements = elements.len(), "custom id pattern failed to compile");
                false
            }
        }
    }
}

/// Validates `candidate` against `elements` with the default settings.
pub fn validate(candidate: &str, elements: &[Element]) -> bool {
    Validator::default().validate(candidate, elements)
}
