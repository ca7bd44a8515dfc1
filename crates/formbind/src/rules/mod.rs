// File: src/rules/mod.rs
// Purpose: Validation rule trait and outcome model

use serde::{Deserialize, Serialize};

use crate::value::Value;

pub mod bounds;
pub mod matching;
pub mod required;

pub use bounds::{BoundSource, MaxRule, MinRule};
pub use matching::MatchRule;
pub use required::RequiredRule;

/// Result of evaluating one rule against a field's current view value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOutcome {
    /// The flag is set valid and the value flows to the model.
    Valid,
    /// The flag is set invalid but the value still flows to the model, so
    /// dependent displays can render the out-of-range value.
    Invalid,
    /// The flag is set invalid and the value is withheld from the model.
    Withhold,
}

/// One validity check in a field's ordered rule sequence.
///
/// Rules are stateless: each evaluation reads the current view value (and
/// whatever the rule itself holds a handle to) and yields an outcome. The
/// field turns outcomes into flag updates and propagation decisions.
pub trait ValidationRule {
    /// Name of the flag this rule writes in the field's validity set.
    fn name(&self) -> &'static str;

    /// Evaluate against the current view value.
    fn evaluate(&self, value: &Value) -> RuleOutcome;
}
