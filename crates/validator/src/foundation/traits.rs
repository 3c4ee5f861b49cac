//! Core traits for the validation system
//!
//! Every standard constraint in a rule set is backed by a small checker type
//! implementing [`Validate`]. The evaluator runs them in a fixed order and
//! stops at the first failure.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all checkers implement.
///
/// Generic over the input type; every checker in this crate validates `str`.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("required", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("x").is_ok());
/// assert!(NotBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert_eq!(AlwaysFails.validate("test").unwrap_err().code, "always_fails");
    }

    #[test]
    fn test_dyn_checks_short_circuit() {
        let checks: [&dyn Validate<Input = str>; 2] = [&AlwaysValid, &AlwaysFails];
        let first_failure = checks.iter().find_map(|c| c.validate("x").err());
        assert_eq!(first_failure.map(|e| e.code), Some("always_fails".into()));
    }
}
