//! Identifier generation.

use chrono::NaiveDate;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::clock::{Clock, SystemClock};
use crate::random::{RandSource, ThreadRandom};
use crate::{datetime, ordering, Element, ElementKind};

/// Renders element lists into identifiers.
///
/// Holds the random source and the clock; everything else is a pure function
/// of the elements and the counter value.
#[derive(Debug, Clone, Default)]
pub struct Generator<R = ThreadRandom, C = SystemClock> {
    rand: R,
    clock: C,
}

impl Generator {
    /// Creates a generator using the thread RNG and the local system date.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RandSource, C: Clock> Generator<R, C> {
    /// Creates a generator from explicit sources.
    pub fn with_sources(rand: R, clock: C) -> Self {
        Self { rand, clock }
    }

    /// Renders `elements` in sort order, feeding `counter` to the sequence
    /// element.
    ///
    /// An empty element list yields a random UUID so an item never ends up
    /// with an empty identifier.
    pub fn generate(&mut self, elements: &[Element], counter: u64) -> String {
        if elements.is_empty() {
            return self.uuid().to_string();
        }

        let today = self.clock.today();
        let mut out = String::new();
        for element in ordering::sorted(elements) {
            let part = self.render(&element.kind, counter, today);
            out.push_str(&part);
        }

        debug!(elements = elements.len(), counter, "generated custom id");
        out
    }

    /// Renders a single element.
    pub fn render(&mut self, kind: &ElementKind, counter: u64, today: NaiveDate) -> String {
        match kind {
            ElementKind::FixedText { value } => value.clone(),
            ElementKind::Random20Bit => format!("{:05X}", self.rand.rand_u32() >> 12),
            ElementKind::Random32Bit => format!("{:08X}", self.rand.rand_u32()),
            ElementKind::Random6Digit => self.rand.rand_in(100_000..=999_999).to_string(),
            ElementKind::Random9Digit => {
                self.rand.rand_in(100_000_000..=999_999_999).to_string()
            }
            ElementKind::Guid => self.uuid().to_string(),
            ElementKind::DateTime { format } => datetime::render(format, today),
            ElementKind::Sequence { padding } => {
                format!("{:0width$}", counter, width = padding.width())
            }
        }
    }

    fn uuid(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rand.rand_bytes()).into_uuid()
    }
}

/// Generates an identifier with the thread RNG and the local date.
pub fn generate(elements: &[Element], counter: u64) -> String {
    Generator::new().generate(elements, counter)
}
