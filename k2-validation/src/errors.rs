// Validation errors

use thiserror::Error;

/// A parameter failed validation.
///
/// Displays as its message alone, which is what callers surface to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
        }
    }

    /// A required field was not provided.
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("You have to provide the {}", field),
            field,
            constraint: "required".to_string(),
        }
    }

    /// A field was provided but cannot be used as given.
    pub fn invalid(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(field.clone(), format!("The {} is not valid", field)).with_constraint("invalid")
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}
