// File: src/rules/matching.rs
// Purpose: Cross-field match rule (password confirmation style)

use formbind_rules::values_match;

use crate::field::Field;
use crate::rules::{RuleOutcome, ValidationRule};
use crate::value::Value;

/// Flags the dependent field invalid when its value differs from a
/// reference field's bound value.
///
/// One-directional: only the dependent field carries the `"match"` flag;
/// the reference field is never flagged. The reference is an explicit
/// handle, not a name to be looked up.
pub struct MatchRule {
    reference: Field,
}

impl MatchRule {
    /// Wire `dependent` to track `reference`.
    ///
    /// Attaches the rule to the dependent field and subscribes it to the
    /// reference field's change notifications, so a reference-side edit
    /// alone re-triggers the dependent's evaluation. The subscription holds
    /// a weak handle: dropping the dependent field detaches it.
    pub fn bind(dependent: &Field, reference: &Field) {
        dependent.attach(Self {
            reference: reference.clone(),
        });
        let weak = dependent.downgrade();
        reference.subscribe(move |_| {
            if let Some(dependent) = weak.upgrade() {
                dependent.revalidate();
            }
        });
    }
}

impl ValidationRule for MatchRule {
    fn name(&self) -> &'static str {
        "match"
    }

    fn evaluate(&self, value: &Value) -> RuleOutcome {
        if values_match(value, &self.reference.model_value()) {
            RuleOutcome::Valid
        } else {
            RuleOutcome::Invalid
        }
    }
}
