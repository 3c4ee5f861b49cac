//! String content validators
//!
//! Regex-backed checks. Patterns are compiled by the caller (rule sets compile
//! them at registration), so these checkers never fail on a bad pattern.

use std::collections::BTreeMap;

use regex::Regex;

use crate::foundation::ValidationError;

// ============================================================================
// PATTERN
// ============================================================================

crate::validator! {
    /// Fails when the value does *not* match the pattern anywhere.
    pub Matches { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern", "Invalid format")
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
    new(pattern: Regex) { Self { pattern } }
    fn matches(pattern: Regex);
}

// ============================================================================
// FORBIDDEN PATTERNS
// ============================================================================

crate::validator! {
    /// Fails when the configured special-character pattern matches anywhere.
    pub NoSpecialChars { pattern: Regex } for str;
    rule(self, input) { !self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("noSpecialChars", "Special characters are not allowed")
    }
    new(pattern: Regex) { Self { pattern } }
    fn no_special_chars(pattern: Regex);
}

crate::validator! {
    /// Fails when the configured repeated-digit pattern matches.
    pub NoRepeatingDigits { pattern: Regex } for str;
    rule(self, input) { !self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("noRepeatingDigits", "Repeating digits are not allowed")
    }
    new(pattern: Regex) { Self { pattern } }
    fn no_repeating_digits(pattern: Regex);
}

// ============================================================================
// COMPOUND PATTERNS
// ============================================================================

crate::validator! {
    /// Fails as a single unit when any named sub-pattern does not match.
    ///
    /// The error deliberately does not say which sub-pattern failed.
    pub AllPatterns { patterns: BTreeMap<String, Regex> } for str;
    rule(self, input) { self.patterns.values().all(|p| p.is_match(input)) }
    error(self, input) {
        ValidationError::new("patterns", "Value does not meet all requirements")
    }
    new(patterns: BTreeMap<String, Regex>) { Self { patterns } }
    fn all_patterns(patterns: BTreeMap<String, Regex>);
}

// ============================================================================
// TESTS
// ============================================================================
