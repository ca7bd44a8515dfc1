// File: src/rules/bounds.rs
// Purpose: Max/min rules comparing a value against a dynamically supplied bound

use std::fmt;
use std::rc::Rc;

use formbind_rules::{within_max, within_min};

use crate::rules::{RuleOutcome, ValidationRule};
use crate::value::Value;

/// Supplies the current comparison bound for a max/min rule.
///
/// `None` means no constraint and the rule passes without comparing. A
/// `Dynamic` source is re-read on every evaluation; the host signals that
/// its underlying expression changed by calling
/// [`Field::revalidate`](crate::Field::revalidate).
#[derive(Clone)]
pub enum BoundSource {
    Unset,
    Fixed(f64),
    Dynamic(Rc<dyn Fn() -> Option<f64>>),
}

impl BoundSource {
    pub fn dynamic(source: impl Fn() -> Option<f64> + 'static) -> Self {
        Self::Dynamic(Rc::new(source))
    }

    /// Current bound, or `None` when unset.
    pub fn get(&self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Fixed(bound) => Some(*bound),
            Self::Dynamic(source) => source(),
        }
    }
}

impl fmt::Debug for BoundSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Fixed(bound) => write!(f, "Fixed({})", bound),
            Self::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

impl From<f64> for BoundSource {
    fn from(bound: f64) -> Self {
        Self::Fixed(bound)
    }
}

impl From<Option<f64>> for BoundSource {
    fn from(bound: Option<f64>) -> Self {
        match bound {
            Some(bound) => Self::Fixed(bound),
            None => Self::Unset,
        }
    }
}

/// Flags a field invalid when its numeric value exceeds the bound.
///
/// The value itself is never cleared or coerced on failure; it still
/// propagates to the model.
#[derive(Debug, Clone)]
pub struct MaxRule {
    bound: BoundSource,
}

impl MaxRule {
    pub fn new(bound: impl Into<BoundSource>) -> Self {
        Self {
            bound: bound.into(),
        }
    }
}

impl ValidationRule for MaxRule {
    fn name(&self) -> &'static str {
        "max"
    }

    fn evaluate(&self, value: &Value) -> RuleOutcome {
        if value.is_empty() {
            return RuleOutcome::Valid;
        }
        match (value.as_number(), self.bound.get()) {
            (Some(v), Some(bound)) if !within_max(v, bound) => RuleOutcome::Invalid,
            // unset bound or non-numeric value: no comparison performed
            _ => RuleOutcome::Valid,
        }
    }
}

/// Flags a field invalid when its numeric value falls below the bound.
#[derive(Debug, Clone)]
pub struct MinRule {
    bound: BoundSource,
}

impl MinRule {
    pub fn new(bound: impl Into<BoundSource>) -> Self {
        Self {
            bound: bound.into(),
        }
    }
}

impl ValidationRule for MinRule {
    fn name(&self) -> &'static str {
        "min"
    }

    fn evaluate(&self, value: &Value) -> RuleOutcome {
        if value.is_empty() {
            return RuleOutcome::Valid;
        }
        match (value.as_number(), self.bound.get()) {
            (Some(v), Some(bound)) if !within_min(v, bound) => RuleOutcome::Invalid,
            _ => RuleOutcome::Valid,
        }
    }
}
