// Validation traits

use crate::ValidationError;

/// Types whose fields are checked before an operation proceeds.
///
/// Checks run in a fixed, declared order and stop at the first failure.
pub trait Validate {
    /// Validate the value, returning the first failure.
    fn validate(&self) -> Result<(), ValidationError>;
}
