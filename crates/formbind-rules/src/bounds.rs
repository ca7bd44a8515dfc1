//! Numeric bound predicates

/// A value satisfies a max bound when it does not exceed it
pub fn within_max<T: PartialOrd>(value: T, max: T) -> bool {
    value <= max
}

/// A value satisfies a min bound when it does not fall below it
pub fn within_min<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

/// A value satisfies a range when it satisfies both bounds
pub fn within_range<T: PartialOrd + Copy>(value: T, min: T, max: T) -> bool {
    within_min(value, min) && within_max(value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_max() {
        assert!(within_max(5, 10));
        assert!(within_max(10, 10));
        assert!(!within_max(15, 10));

        assert!(within_max(99.9, 100.0));
        assert!(!within_max(100.1, 100.0));
    }

    #[test]
    fn test_within_min() {
        assert!(within_min(10, 5));
        assert!(within_min(5, 5));
        assert!(!within_min(3, 5));

        assert!(within_min(18.5, 18.0));
        assert!(!within_min(17.9, 18.0));
    }

    #[test]
    fn test_within_range() {
        assert!(within_range(5, 1, 10));
        assert!(within_range(1, 1, 10));
        assert!(within_range(10, 1, 10));
        assert!(!within_range(0, 1, 10));
        assert!(!within_range(11, 1, 10));
    }
}
