//! Parameter validation for K2 Connect operations
//!
//! Every outbound operation checks its required parameters before any
//! network call. Checks run in a fixed order per operation and report the
//! first missing field as `You have to provide the <field>`.
//!
//! # Examples
//!
//! ```
//! use k2_validation::{FieldChecks, Validate, ValidationError};
//!
//! struct StatusParams {
//!     location: Option<String>,
//!     access_token: Option<String>,
//! }
//!
//! impl Validate for StatusParams {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         FieldChecks::new()
//!             .required("location", self.location.as_deref())
//!             .required("accessToken", self.access_token.as_deref())
//!             .finish()
//!     }
//! }
//!
//! let params = StatusParams { location: None, access_token: Some("token".into()) };
//! let err = params.validate().unwrap_err();
//! assert_eq!(err.to_string(), "You have to provide the location");
//! ```

mod errors;
mod rules;
mod traits;

pub use errors::ValidationError;
pub use rules::{
    COMPANY_SCOPE, FieldChecks, HeaderSafe, Required, ScopeReference, is_company_scope,
};
pub use traits::Validate;
