// File: src/rules/required.rs
// Purpose: Non-empty rule; withholds empty values from the model

use crate::rules::{RuleOutcome, ValidationRule};
use crate::value::Value;

/// Flags a field invalid and withholds the value from the model when the
/// view value is empty.
///
/// Unlike the bound rules, failure here blocks propagation: the model is
/// left unset rather than receiving the empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredRule;

impl ValidationRule for RequiredRule {
    fn name(&self) -> &'static str {
        "required"
    }

    fn evaluate(&self, value: &Value) -> RuleOutcome {
        if value.is_empty() {
            RuleOutcome::Withhold
        } else {
            RuleOutcome::Valid
        }
    }
}
