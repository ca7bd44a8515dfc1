// File: src/error.rs
// Purpose: Typed errors for form registry configuration mistakes

use thiserror::Error;

/// Configuration errors raised by [`Form`](crate::Form).
///
/// Rule evaluation itself never errors; failed checks are validity flags.
/// These errors cover wiring mistakes, caught fail-fast instead of
/// silently no-opping on a misspelled field name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field already registered: {0}")]
    DuplicateField(String),
}
