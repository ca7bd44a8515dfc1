// File: src/field.rs
// Purpose: Field binding handle, value pipeline, and observer notifications

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::rules::{RuleOutcome, ValidationRule};
use crate::validity::ValiditySet;
use crate::value::Value;

/// Callback invoked after a field commits a value change. Receives the
/// committed model value.
pub type ObserverFn = Rc<dyn Fn(&Value)>;

struct FieldState {
    name: String,
    view_value: Value,
    model_value: Value,
    rules: Vec<Box<dyn ValidationRule>>,
    validity: ValiditySet,
    observers: Vec<ObserverFn>,
}

/// Shared handle to one bound form field.
///
/// A field associates a displayed (view) value, a bound (model) value, an
/// ordered rule sequence, and a set of named validity flags. All state is
/// single-threaded (`Rc<RefCell<_>>`); value changes run the rule sequence
/// synchronously and then notify observers once the mutating borrow has been
/// released, so observers may freely read any field or revalidate dependents.
#[derive(Clone)]
pub struct Field {
    state: Rc<RefCell<FieldState>>,
}

// Manual impl: the boxed rules and observers carry no useful Debug output.
impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Field")
            .field("name", &state.name)
            .field("view_value", &state.view_value)
            .field("model_value", &state.model_value)
            .field("validity", &state.validity)
            .finish()
    }
}

/// Non-owning handle for subscriptions that must not keep a field alive.
#[derive(Clone)]
pub struct WeakField {
    state: Weak<RefCell<FieldState>>,
}

impl WeakField {
    pub fn upgrade(&self) -> Option<Field> {
        self.state.upgrade().map(|state| Field { state })
    }
}

impl Field {
    /// Create a fresh field. Both values start unset and the validity set
    /// is empty, so the field reads as valid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                name: name.into(),
                view_value: Value::Null,
                model_value: Value::Null,
                rules: Vec::new(),
                validity: ValiditySet::new(),
                observers: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    /// Currently displayed (view) value.
    pub fn value(&self) -> Value {
        self.state.borrow().view_value.clone()
    }

    /// Current bound (model) value.
    pub fn model_value(&self) -> Value {
        self.state.borrow().model_value.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().view_value.is_empty()
    }

    /// Overall validity: the AND of every flag in the validity set.
    pub fn is_valid(&self) -> bool {
        self.state.borrow().validity.is_valid()
    }

    /// Flag for one named rule, if that rule has a flag on this field.
    pub fn validity(&self, rule: &str) -> Option<bool> {
        self.state.borrow().validity.get(rule)
    }

    /// Set one named flag directly. Host-side custom checks use this; the
    /// attached rules maintain their own flags through the value pipeline.
    pub fn set_validity(&self, rule: &str, valid: bool) {
        let state = &mut *self.state.borrow_mut();
        record_flag(&mut state.validity, &state.name, rule, valid);
    }

    /// Attach a rule at the end of the field's rule sequence.
    ///
    /// The rule's flag starts out valid; the first evaluation happens on
    /// the next value change or [`revalidate`](Self::revalidate) call.
    pub fn attach(&self, rule: impl ValidationRule + 'static) {
        let state = &mut *self.state.borrow_mut();
        state.validity.set(rule.name(), true);
        state.rules.push(Box::new(rule));
    }

    /// Register an observer invoked after every committed value change.
    pub fn subscribe(&self, observer: impl Fn(&Value) + 'static) {
        self.state.borrow_mut().observers.push(Rc::new(observer));
    }

    pub fn downgrade(&self) -> WeakField {
        WeakField {
            state: Rc::downgrade(&self.state),
        }
    }

    /// View-side change: the value the user typed. Runs the rule sequence
    /// and propagates the value to the model; a withholding rule leaves the
    /// model unset instead.
    pub fn set_view_value(&self, value: impl Into<Value>) {
        {
            let state = &mut *self.state.borrow_mut();
            state.view_value = value.into();
            let withheld = evaluate_rules(state);
            if withheld {
                state.model_value = Value::Null;
                tracing::trace!(field = %state.name, "value withheld from model");
            } else {
                state.model_value = state.view_value.clone();
                tracing::trace!(
                    field = %state.name,
                    value = %state.model_value,
                    "value propagated to model"
                );
            }
        }
        self.notify();
    }

    /// Model-side change: a programmatic update. The new value is reflected
    /// into the view and the rule flags recomputed; nothing is withheld on
    /// this path, the host set the model deliberately.
    pub fn set_model_value(&self, value: impl Into<Value>) {
        {
            let state = &mut *self.state.borrow_mut();
            state.model_value = value.into();
            state.view_value = state.model_value.clone();
            evaluate_rules(state);
        }
        self.notify();
    }

    /// Recompute every rule flag against the current view value. Hosts call
    /// this when a rule dependency changed without a value change, e.g. a
    /// dynamic bound source. Observers are not notified: no value moved.
    pub fn revalidate(&self) {
        let state = &mut *self.state.borrow_mut();
        evaluate_rules(state);
    }

    fn notify(&self) {
        let (observers, value) = {
            let state = self.state.borrow();
            (state.observers.clone(), state.model_value.clone())
        };
        for observer in &observers {
            observer(&value);
        }
    }
}

/// Run the field's rule sequence against its current view value, updating
/// flags in place. Returns whether any rule withheld the value.
fn evaluate_rules(state: &mut FieldState) -> bool {
    let mut withheld = false;
    for rule in &state.rules {
        let outcome = rule.evaluate(&state.view_value);
        record_flag(
            &mut state.validity,
            &state.name,
            rule.name(),
            outcome == RuleOutcome::Valid,
        );
        if outcome == RuleOutcome::Withhold {
            withheld = true;
        }
    }
    withheld
}

fn record_flag(validity: &mut ValiditySet, field: &str, rule: &str, valid: bool) {
    let previous = validity.set(rule, valid);
    if previous != Some(valid) {
        tracing::debug!(field, rule, valid, "validity flag changed");
    }
}
