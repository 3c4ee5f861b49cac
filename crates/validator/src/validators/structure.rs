//! Structural string checks
//!
//! Character-level constraints that need no configuration: spaces, digits
//! and capitalisation.

use crate::foundation::ValidationError;

crate::validator! {
    /// Fails when the value is empty or whitespace only.
    pub Required for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}

crate::validator! {
    /// Fails when the value contains a space character.
    pub NoSpaces for str;
    rule(input) { !input.contains(' ') }
    error(input) { ValidationError::new("noSpaces", "Spaces are not allowed") }
    fn no_spaces();
}

crate::validator! {
    /// Fails when the first character is a space.
    pub NoLeadingSpace for str;
    rule(input) { !input.starts_with(' ') }
    error(input) { ValidationError::new("noLeadingSpace", "Must not start with a space") }
    fn no_leading_space();
}

crate::validator! {
    /// Fails when any ASCII digit is present.
    pub NoNumbers for str;
    rule(input) { !input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("noNumbers", "Numbers are not allowed") }
    fn no_numbers();
}

crate::validator! {
    /// Fails when two or more consecutive spaces occur.
    pub NoMultipleSpaces for str;
    rule(input) { !input.contains("  ") }
    error(input) {
        ValidationError::new("noMultipleSpaces", "Consecutive spaces are not allowed")
    }
    fn no_multiple_spaces();
}

crate::validator! {
    /// Fails unless the first character is an uppercase letter.
    pub CapitalizeFirst for str;
    rule(input) { input.chars().next().is_some_and(char::is_uppercase) }
    error(input) {
        ValidationError::new("capitalizeFirst", "First letter must be capitalized")
    }
    fn capitalize_first();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_required() {
        assert!(required().validate("x").is_ok());
        assert!(required().validate("").is_err());
        assert!(required().validate(" \t\n").is_err());
        assert_eq!(required().validate("").unwrap_err(), ValidationError::required());
    }

    #[test]
    fn test_no_spaces() {
        assert!(no_spaces().validate("user@example.com").is_ok());
        assert!(no_spaces().validate("user @example.com").is_err());
    }

    #[test]
    fn test_no_leading_space() {
        assert!(no_leading_space().validate("John").is_ok());
        assert!(no_leading_space().validate("John ").is_ok());
        assert!(no_leading_space().validate(" John").is_err());
    }

    #[test]
    fn test_no_numbers() {
        assert!(no_numbers().validate("John Doe").is_ok());
        assert!(no_numbers().validate("John2").is_err());
    }

    #[test]
    fn test_no_multiple_spaces() {
        assert!(no_multiple_spaces().validate("John Doe").is_ok());
        assert!(no_multiple_spaces().validate("John  Doe").is_err());
    }

    #[test]
    fn test_capitalize_first() {
        assert!(capitalize_first().validate("John").is_ok());
        assert!(capitalize_first().validate("\u{c9}mile").is_ok());
        assert_eq!(
            capitalize_first().validate("john").unwrap_err().code,
            "capitalizeFirst"
        );
        assert!(capitalize_first().validate("'john").is_err());
    }
}
