//! # formbind
//!
//! Field-binding validation rules: numeric bounds checking, non-blank
//! enforcement, and cross-field (password confirmation) matching, attached
//! to an explicit two-way value pipeline instead of framework lifecycle
//! hooks.
//!
//! Each [`Field`] pairs a displayed (view) value with a bound (model) value
//! and carries an ordered sequence of named validity flags. Rules re-run on
//! every view-side or model-side change and on an explicit
//! [`Field::revalidate`] notification; a field is valid when all of its
//! flags are.
//!
//! ## Quick Start
//!
//! ```rust
//! use formbind::{Field, MatchRule, MaxRule, RequiredRule};
//!
//! let age = Field::new("age");
//! age.attach(RequiredRule);
//! age.attach(MaxRule::new(120.0));
//!
//! age.set_view_value(130);
//! assert!(!age.is_valid());
//! assert_eq!(age.validity("max"), Some(false));
//! // Out-of-range values still reach the model so displays can render them.
//! assert_eq!(age.model_value().as_number(), Some(130.0));
//!
//! let password = Field::new("password");
//! let confirm = Field::new("confirm");
//! MatchRule::bind(&confirm, &password);
//!
//! password.set_view_value("hunter2");
//! confirm.set_view_value("hunter2");
//! assert!(confirm.is_valid());
//!
//! // A reference-side edit alone re-triggers the dependent's check.
//! password.set_view_value("hunter3");
//! assert_eq!(confirm.validity("match"), Some(false));
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod rules;
pub mod validity;
pub mod value;

pub use error::FormError;
pub use field::{Field, ObserverFn, WeakField};
pub use form::Form;
pub use rules::{
    BoundSource, MatchRule, MaxRule, MinRule, RequiredRule, RuleOutcome, ValidationRule,
};
pub use validity::ValiditySet;
pub use value::Value;
