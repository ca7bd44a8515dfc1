//! Presence and equality predicates

/// A text value is present when it has non-zero length
pub fn non_blank(s: &str) -> bool {
    !s.is_empty()
}

/// Equality check backing the cross-field match rule
pub fn values_match<T: PartialEq + ?Sized>(value: &T, reference: &T) -> bool {
    value == reference
}
