//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` is five
//! characters long even though it is six bytes.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Fails when a string is shorter than `min` characters.
    ///
    /// The error carries a `minLength` parameter for message templates.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Fails when a string is longer than `max` characters.
    ///
    /// The error carries a `maxLength` parameter for message templates.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn test_max_length() {
        let validator = max_length(5);
        assert!(validator.validate("hello").is_ok());
        let err = validator.validate("verylongstring").unwrap_err();
        assert_eq!(err.code, "maxLength");
        assert_eq!(err.param("maxLength"), Some("5"));
        assert_eq!(err.param("actual"), Some("14"));
    }

    #[test]
    fn test_unicode_handling() {
        assert!(min_length(5).validate("h\u{e9}llo").is_ok());
        assert!(max_length(5).validate("h\u{e9}llo").is_ok());
        assert!(min_length(5).validate("\u{1f44b}\u{1f30d}").is_err());
    }
}
