//! Cross-field validators
//!
//! These read another field's current value from the submitted form.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Fails when the referenced field's value differs from the input.
///
/// An absent reference never equals the input.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::foundation::Validate;
/// use fieldrule_validator::validators::MatchesField;
///
/// let check = MatchesField::new("password", Some("s3cret"));
/// assert!(check.validate("s3cret").is_ok());
/// assert!(check.validate("other").is_err());
/// assert!(MatchesField::new("password", None).validate("s3cret").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchesField<'a> {
    /// Name of the referenced field.
    pub field: &'a str,
    /// Its current value in the form, if present.
    pub expected: Option<&'a str>,
}

impl<'a> MatchesField<'a> {
    /// Creates a new cross-field equality check.
    #[must_use]
    pub fn new(field: &'a str, expected: Option<&'a str>) -> Self {
        Self { field, expected }
    }
}

impl Validate for MatchesField<'_> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.expected == Some(input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("matchField", format!("Must match {}", self.field))
                    .with_param("matchField", Cow::Owned(self.field.to_owned())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_values() {
        assert!(MatchesField::new("password", Some("abc")).validate("abc").is_ok());
    }

    #[test]
    fn test_mismatch_carries_reference() {
        let err = MatchesField::new("password", Some("xyz"))
            .validate("abc")
            .unwrap_err();
        assert_eq!(err.code, "matchField");
        assert_eq!(err.param("matchField"), Some("password"));
    }
}
