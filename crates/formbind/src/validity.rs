// File: src/validity.rs
// Purpose: Named validity flags attached to one field binding

/// Ordered rule-name to flag map for one field.
///
/// Overall validity is the logical AND of every entry; an empty set is
/// valid. Flags keep the order in which their rules were attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValiditySet {
    flags: Vec<(String, bool)>,
}

impl ValiditySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named flag, returning its previous state if it existed.
    pub fn set(&mut self, rule: &str, valid: bool) -> Option<bool> {
        if let Some((_, flag)) = self.flags.iter_mut().find(|(name, _)| name.as_str() == rule) {
            let previous = *flag;
            *flag = valid;
            Some(previous)
        } else {
            self.flags.push((rule.to_string(), valid));
            None
        }
    }

    /// Flag for one named rule, if set.
    pub fn get(&self, rule: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|(name, _)| name.as_str() == rule)
            .map(|(_, flag)| *flag)
    }

    /// Logical AND of all flags.
    pub fn is_valid(&self) -> bool {
        self.flags.iter().all(|(_, flag)| *flag)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flags in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, flag)| (name.as_str(), *flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_valid() {
        assert!(ValiditySet::new().is_valid());
    }

    #[test]
    fn test_set_and_get() {
        let mut set = ValiditySet::new();
        assert_eq!(set.set("max", true), None);
        assert_eq!(set.get("max"), Some(true));
        assert_eq!(set.get("min"), None);

        assert_eq!(set.set("max", false), Some(true));
        assert_eq!(set.get("max"), Some(false));
    }

    #[test]
    fn test_len_counts_distinct_rules() {
        let mut set = ValiditySet::new();
        assert!(set.is_empty());

        set.set("max", true);
        set.set("max", false);
        set.set("min", true);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_overall_validity_is_the_and() {
        let mut set = ValiditySet::new();
        set.set("required", true);
        set.set("max", true);
        assert!(set.is_valid());

        set.set("max", false);
        assert!(!set.is_valid());
    }

    #[test]
    fn test_attachment_order_preserved() {
        let mut set = ValiditySet::new();
        set.set("required", true);
        set.set("max", false);

        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["required", "max"]);
    }
}
