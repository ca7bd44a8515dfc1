//! Formbind Rule Predicates
//!
//! Pure predicate functions behind the formbind validation rules, compatible
//! with both std and no_std environments so the same checks can run
//! server-side and client-side.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bounds;
pub mod text;

// Re-export all predicates
pub use bounds::*;
pub use text::*;
