//! Built-in checkers
//!
//! One checker per standard constraint a [`RuleSet`](crate::rules::RuleSet)
//! can carry. Each returns a [`ValidationError`](crate::foundation::ValidationError)
//! whose `code` is the constraint key it enforces.
//!
//! # Examples
//!
//! ```rust
//! use fieldrule_validator::foundation::Validate;
//! use fieldrule_validator::validators::*;
//!
//! assert!(min_length(6).validate("secret").is_ok());
//! assert_eq!(no_spaces().validate("a b").unwrap_err().code, "noSpaces");
//! ```

pub mod content;
pub mod cross_field;
pub mod length;
pub mod structure;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{
    AllPatterns, Matches, NoRepeatingDigits, NoSpecialChars, all_patterns, matches,
    no_repeating_digits, no_special_chars,
};
pub use cross_field::MatchesField;
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use structure::{
    CapitalizeFirst, NoLeadingSpace, NoMultipleSpaces, NoNumbers, NoSpaces, Required,
    capitalize_first, no_leading_space, no_multiple_spaces, no_numbers, no_spaces, required,
};
