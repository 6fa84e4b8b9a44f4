// Validation rules

use crate::ValidationError;

/// The scope that does not need a scope reference.
pub const COMPANY_SCOPE: &str = "company";

/// Validates that a value was provided and is not blank
pub struct Required;

impl Required {
    pub fn validate(value: Option<&str>, field: &str) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::missing(field)),
        }
    }
}

/// Validates a scope reference, which is only optional for the company scope
pub struct ScopeReference;

impl ScopeReference {
    pub fn validate(
        scope: Option<&str>,
        reference: Option<&str>,
        field: &str,
    ) -> Result<(), ValidationError> {
        if is_company_scope(scope) {
            Ok(())
        } else {
            Required::validate(reference, field)
        }
    }
}

/// Validates that a value can be sent verbatim in an HTTP header
pub struct HeaderSafe;

impl HeaderSafe {
    pub fn validate(value: Option<&str>, field: &str) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b)) => {
                Err(ValidationError::invalid(field).with_constraint("header_value"))
            }
            _ => Ok(()),
        }
    }
}

/// Whether `scope` names the company scope, ignoring ASCII case.
pub fn is_company_scope(scope: Option<&str>) -> bool {
    scope.is_some_and(|s| s.trim().eq_ignore_ascii_case(COMPANY_SCOPE))
}

/// Ordered, short-circuiting checks over an operation's fields.
///
/// The first failing check wins; later checks are not evaluated.
#[derive(Debug)]
pub struct FieldChecks {
    result: Result<(), ValidationError>,
}

impl FieldChecks {
    /// Start a new chain of checks
    pub fn new() -> Self {
        Self { result: Ok(()) }
    }

    /// Require `value` to be present and non-blank
    pub fn required(self, field: &str, value: Option<&str>) -> Self {
        self.then(|| Required::validate(value, field))
    }

    /// Require a scope reference unless `scope` is the company scope
    pub fn scope_reference(self, field: &str, scope: Option<&str>, reference: Option<&str>) -> Self {
        self.then(|| ScopeReference::validate(scope, reference, field))
    }

    /// Require `value`, if present, to be usable as a header value
    pub fn header_safe(self, field: &str, value: Option<&str>) -> Self {
        self.then(|| HeaderSafe::validate(value, field))
    }

    /// Run a custom check if no earlier check has failed
    pub fn then<F>(self, check: F) -> Self
    where
        F: FnOnce() -> Result<(), ValidationError>,
    {
        match self.result {
            Ok(()) => Self { result: check() },
            Err(_) => self,
        }
    }

    /// Finish the chain
    pub fn finish(self) -> Result<(), ValidationError> {
        self.result
    }
}

impl Default for FieldChecks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(Required::validate(Some("value"), "url").is_ok());
        assert!(Required::validate(None, "url").is_err());
        assert!(Required::validate(Some(""), "url").is_err());
        assert!(Required::validate(Some("   "), "url").is_err());
    }

    #[test]
    fn test_company_scope_is_case_insensitive() {
        assert!(is_company_scope(Some("company")));
        assert!(is_company_scope(Some("Company")));
        assert!(is_company_scope(Some("COMPANY")));
        assert!(!is_company_scope(Some("till")));
        assert!(!is_company_scope(None));
    }

    #[test]
    fn test_scope_reference() {
        assert!(ScopeReference::validate(Some("company"), None, "scopeReference").is_ok());
        assert!(ScopeReference::validate(Some("till"), Some("9597"), "scopeReference").is_ok());

        let err = ScopeReference::validate(Some("till"), None, "scopeReference").unwrap_err();
        assert_eq!(err.message, "You have to provide the scopeReference");

        // Unknown scopes require a reference too
        assert!(ScopeReference::validate(Some("branch"), None, "scopeReference").is_err());
    }

    #[test]
    fn test_header_safe() {
        assert!(HeaderSafe::validate(Some("myRand0mAcc3ssT0k3n"), "accessToken").is_ok());
        assert!(HeaderSafe::validate(None, "accessToken").is_ok());

        let err = HeaderSafe::validate(Some("tok\nen"), "accessToken").unwrap_err();
        assert_eq!(err.message, "The accessToken is not valid");
        assert_eq!(err.constraint, "header_value");

        assert!(HeaderSafe::validate(Some("tok\u{e9}n"), "accessToken").is_err());
    }

    #[test]
    fn test_field_checks_stop_at_first_failure() {
        let err = FieldChecks::new()
            .required("fromTime", Some("2021-03-28T08:50:22+03:00"))
            .required("toTime", None)
            .required("scope", None)
            .finish()
            .unwrap_err();

        assert_eq!(err.field, "toTime");
    }

    #[test]
    fn test_field_checks_skip_after_failure() {
        let mut ran = false;
        let result = FieldChecks::new()
            .required("location", None)
            .then(|| {
                ran = true;
                Ok(())
            })
            .finish();

        assert!(result.is_err());
        assert!(!ran);
    }
}
