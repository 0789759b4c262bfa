//! Element ordering shared by the generator and the validator.
//!
//! Elements are ordered by `sort_order`, ties keep their input order. Both
//! sides go through [`sorted`] so they can never disagree on positions.

use crate::Element;

/// Returns the elements in rendering order.
///
/// The sort is stable: elements with equal `sort_order` keep their relative
/// input order.
pub fn sorted(elements: &[Element]) -> Vec<&Element> {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|element| element.sort_order);
    ordered
}

/// Returns the elements in rendering order with contiguous `sort_order`
/// values starting at zero.
///
/// Gaps and duplicates left behind by editing are removed. Idempotent.
pub fn normalize(elements: impl IntoIterator<Item = Element>) -> Vec<Element> {
    let mut ordered: Vec<Element> = elements.into_iter().collect();
    ordered.sort_by_key(|element| element.sort_order);
    reindex(&mut ordered);
    ordered
}

/// Rewrites `sort_order` to match each element's position.
pub fn reindex(elements: &mut [Element]) {
    for (index, element) in elements.iter_mut().enumerate() {
        element.sort_order = index as i64;
    }
}

/// Moves the element at `from` to `to`, shifting the ones in between.
///
/// Both indices must be in bounds.
pub(crate) fn move_within<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementType;

    fn labels(elements: &[&Element]) -> Vec<String> {
        elements
            .iter()
            .map(|element| match &element.kind {
                crate::ElementKind::FixedText { value } => value.clone(),
                other => other.element_type().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_sorted_orders_by_sort_order() {
        let elements = vec![
            Element::fixed_text("c", 10),
            Element::fixed_text("a", -2),
            Element::fixed_text("b", 3),
        ];
        assert_eq!(labels(&sorted(&elements)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sorted_is_stable_for_ties() {
        let elements = vec![
            Element::fixed_text("first", 1),
            Element::of(ElementType::Guid, 0),
            Element::fixed_text("second", 1),
            Element::fixed_text("third", 1),
        ];
        assert_eq!(
            labels(&sorted(&elements)),
            vec!["GUID", "first", "second", "third"]
        );
    }

    #[test]
    fn test_normalize_removes_gaps_and_duplicates() {
        let elements = vec![
            Element::fixed_text("b", 7),
            Element::fixed_text("a", 2),
            Element::fixed_text("c", 7),
        ];
        let normalized = normalize(elements);
        let orders: Vec<i64> = normalized.iter().map(|e| e.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        let refs: Vec<&Element> = normalized.iter().collect();
        assert_eq!(labels(&refs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let elements = vec![
            Element::fixed_text("x", 4),
            Element::sequence(3, -1),
            Element::fixed_text("y", 4),
        ];
        let once = normalize(elements);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn test_move_within() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_within(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
        move_within(&mut items, 3, 0);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
        move_within(&mut items, 1, 1);
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }
}
