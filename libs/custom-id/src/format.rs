//! Validated element lists.
//!
//! [`Format`] is the constructor-level guard for the rule that a format has
//! at most one sequence element. The free `generate` and `validate`
//! functions accept any slice; callers that persist formats go through
//! `Format` so that a second sequence never reaches storage.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::random::RandSource;
use crate::{
    generator, ordering, validator, Element, ElementKind, ElementRecord, ElementType,
    FormatError, FormatMatcher, Generator,
};

/// Checks the structural invariants of an element list.
pub fn check_elements(elements: &[Element]) -> Result<(), FormatError> {
    let mut sequences = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.kind.is_sequence())
        .map(|(index, _)| index);

    if let (Some(first), Some(second)) = (sequences.next(), sequences.next()) {
        return Err(FormatError::DuplicateSequence { first, second });
    }
    Ok(())
}

/// A custom ID format: an element list with at most one sequence element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Element>", into = "Vec<Element>")]
pub struct Format {
    elements: Vec<Element>,
}

impl Format {
    /// Creates a format, rejecting more than one sequence element.
    ///
    /// Elements are kept in the given order; rendering order comes from
    /// their `sort_order`.
    pub fn new(elements: Vec<Element>) -> Result<Self, FormatError> {
        check_elements(&elements)?;
        Ok(Self { elements })
    }

    /// Creates a format with no elements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the persisted JSON array of element records.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        Self::new(elements)
    }

    /// Encodes the normalized element records as pretty JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&self.to_records())?)
    }

    /// Returns the elements in their stored order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the rendering position of the sequence element, if any.
    pub fn sequence_position(&self) -> Option<usize> {
        ordering::sorted(&self.elements)
            .iter()
            .position(|element| element.kind.is_sequence())
    }

    /// Sorts the elements and renumbers `sort_order` from zero.
    pub fn normalize(&mut self) {
        self.elements = ordering::normalize(std::mem::take(&mut self.elements));
    }

    /// Returns a normalized copy.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut format = self.clone();
        format.normalize();
        format
    }

    /// Returns the records to persist: rendering order, `sortOrder` equal to
    /// position.
    pub fn to_records(&self) -> Vec<ElementRecord> {
        ordering::normalize(self.elements.iter().cloned())
            .into_iter()
            .map(ElementRecord::from)
            .collect()
    }

    /// Appends an element of type `ty` with the editor's starting config.
    ///
    /// On success the format is normalized and the new element takes the
    /// last position. On error the format is left untouched.
    pub fn push(&mut self, ty: ElementType) -> Result<&Element, FormatError> {
        self.push_kind(ElementKind::for_editor(ty))
    }

    /// Appends an element with an explicit configuration.
    pub fn push_kind(&mut self, kind: ElementKind) -> Result<&Element, FormatError> {
        let mut elements = ordering::normalize(self.elements.iter().cloned());
        let index = elements.len();
        elements.push(Element::new(kind, index as i64));
        check_elements(&elements)?;

        self.elements = elements;
        Ok(&self.elements[index])
    }

    /// Replaces the configuration of the element at rendering position `index`.
    ///
    /// Error positions are rendering positions. On error the format is left
    /// untouched.
    pub fn set_kind(&mut self, index: usize, kind: ElementKind) -> Result<(), FormatError> {
        self.check_index(index)?;

        let mut elements = ordering::normalize(self.elements.iter().cloned());
        elements[index].kind = kind;
        check_elements(&elements)?;

        self.elements = elements;
        Ok(())
    }

    /// Removes the element at rendering position `index`.
    pub fn remove(&mut self, index: usize) -> Result<Element, FormatError> {
        self.check_index(index)?;
        self.normalize();
        let removed = self.elements.remove(index);
        ordering::reindex(&mut self.elements);
        Ok(removed)
    }

    /// Moves the element at rendering position `from` to position `to`.
    pub fn move_element(&mut self, from: usize, to: usize) -> Result<(), FormatError> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.normalize();
        ordering::move_within(&mut self.elements, from, to);
        ordering::reindex(&mut self.elements);
        Ok(())
    }

    /// Generates an identifier for `counter` with the thread RNG and local date.
    pub fn generate(&self, counter: u64) -> String {
        generator::generate(&self.elements, counter)
    }

    /// Generates an identifier with a caller-provided generator.
    pub fn generate_with<R: RandSource, C: Clock>(
        &self,
        generator: &mut Generator<R, C>,
        counter: u64,
    ) -> String {
        generator.generate(&self.elements, counter)
    }

    /// Generates the identifier the next item would receive given the
    /// inventory's current counter.
    pub fn preview(&self, current_counter: u64) -> String {
        self.generate(current_counter.saturating_add(1))
    }

    /// Returns true if `candidate` conforms to this format.
    pub fn validate(&self, candidate: &str) -> bool {
        validator::validate(candidate, &self.elements)
    }

    /// Compiles a reusable matcher for this format.
    pub fn matcher(&self) -> Result<FormatMatcher, FormatError> {
        FormatMatcher::compile(&self.elements)
    }

    fn check_index(&self, index: usize) -> Result<(), FormatError> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(FormatError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            })
        }
    }
}

impl TryFrom<Vec<Element>> for Format {
    type Error = FormatError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl From<Format> for Vec<Element> {
    fn from(format: Format) -> Self {
        format.elements
    }
}
