//! Shared result and error types for K2 Connect.
//!
//! All public operations return an [`ApiResponse`]: either
//! `Success(data)` or `Error(message)`. Expected failures, whether
//! validation, transport, signature or payload problems, are folded into
//! that shape through [`K2Error`]. Only [`UsageError`] is surfaced as a
//! hard error, because it indicates integrator misuse.
//!
//! ```
//! use k2_core::{ApiResponse, K2Error};
//!
//! let response: ApiResponse = K2Error::Signature.into();
//! assert_eq!(response, ApiResponse::error("Invalid signature"));
//! ```

mod error;
mod normalize;
mod response;

pub use error::{K2Error, K2Result, UsageError};
pub use normalize::{ResponseShape, normalize, validation_failed};
pub use response::ApiResponse;
