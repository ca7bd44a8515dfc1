// File: src/form.rs
// Purpose: Named field registry with fail-fast lookup

use std::collections::HashMap;

use crate::error::FormError;
use crate::field::Field;

/// Registry of the named fields making up one form.
///
/// Fields work standalone; the registry adds lookup by name and
/// whole-form validity. Lookups fail fast with a typed error.
#[derive(Default)]
pub struct Form {
    fields: HashMap<String, Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a field in one step.
    pub fn add_field(&mut self, name: &str) -> Result<Field, FormError> {
        let field = Field::new(name);
        self.register(field.clone())?;
        Ok(field)
    }

    /// Register an existing field under its own name.
    pub fn register(&mut self, field: Field) -> Result<(), FormError> {
        let name = field.name();
        if self.fields.contains_key(&name) {
            return Err(FormError::DuplicateField(name));
        }
        self.fields.insert(name, field);
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Result<Field, FormError> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// A form is valid when every registered field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.is_valid())
    }

    /// Per-field overall validity snapshot.
    pub fn validity(&self) -> HashMap<String, bool> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.is_valid()))
            .collect()
    }
}
