//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validation failures are values: a failing checker returns a
//! [`ValidationError`] naming the constraint key it enforces, and the
//! evaluator turns that into the field's rendered message.

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs checkers in order and returns the first failure.
///
/// This is the short-circuit primitive the field pipeline is built on.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::foundation::{Validate, first_failure};
/// use fieldrule_validator::validators::{min_length, no_spaces};
///
/// let checks: [&dyn Validate<Input = str>; 2] = [&no_spaces(), &min_length(6)];
/// let err = first_failure("a b", checks).unwrap_err();
/// assert_eq!(err.code, "noSpaces");
/// ```
pub fn first_failure<'a, I>(value: &str, validators: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a dyn Validate<Input = str>>,
{
    for validator in validators {
        validator.validate(value)?;
    }
    Ok(())
}
