//! Default rule table
//!
//! Seeded into every registry built with `seed_defaults = true`. The exact
//! patterns are policy; callers override them with `add_rule`.

use std::sync::LazyLock;

use regex::Regex;

use super::{Constraint, MessageSet, RuleSet, Transform};

// Literal patterns; a failure here is a programming error caught by the tests below.
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| literal(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$"));

static FULL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| literal(r"^[A-Za-z' ]+$"));

static NAME_SPECIAL_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| literal(r"[^A-Za-z' ]"));

static MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| literal(r"^(?:\+91)?[6-9][0-9]{9}$"));

// One digit repeated through the whole number. The regex crate has no
// backreferences, so the ten runs are spelled out.
static REPEATING_DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let runs: Vec<String> = (0..=9).map(|d| format!("{d}{{10}}")).collect();
    literal(&format!(r"^(?:\+91)?(?:{})$", runs.join("|")))
});

static PASSWORD_PATTERNS: LazyLock<[(&str, Regex); 4]> = LazyLock::new(|| {
    [
        ("uppercase", literal("[A-Z]")),
        ("lowercase", literal("[a-z]")),
        ("number", literal("[0-9]")),
        ("special", literal(r"[^A-Za-z0-9\s]")),
    ]
});

/// Returns the default `(field, rules, messages)` table.
pub fn default_table() -> Vec<(&'static str, RuleSet, MessageSet)> {
    vec![
        (
            "email",
            RuleSet::new()
                .required()
                .pattern(EMAIL_REGEX.clone())
                .no_spaces()
                .transform(Transform::lowercase_trim()),
            MessageSet::new()
                .with(Constraint::Required, "Email is required")
                .with(Constraint::Pattern, "Please enter a valid email address")
                .with(Constraint::NoSpaces, "Email cannot contain spaces"),
        ),
        (
            "password",
            RuleSet::new()
                .required()
                .min_length(6)
                .no_spaces()
                .patterns(PASSWORD_PATTERNS.iter().cloned()),
            MessageSet::new()
                .with(Constraint::Required, "Password is required")
                .with(
                    Constraint::MinLength,
                    "Password must be at least {minLength} characters",
                )
                .with(Constraint::NoSpaces, "Password cannot contain spaces")
                .with(
                    Constraint::Patterns,
                    "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character",
                ),
        ),
        (
            "loginPassword",
            RuleSet::new().required().min_length(6).no_spaces(),
            MessageSet::new()
                .with(Constraint::Required, "Password is required")
                .with(
                    Constraint::MinLength,
                    "Password must be at least {minLength} characters",
                )
                .with(Constraint::NoSpaces, "Password cannot contain spaces"),
        ),
        (
            "fullName",
            RuleSet::new()
                .required()
                .min_length(2)
                .max_length(50)
                .pattern(FULL_NAME_REGEX.clone())
                .no_leading_space()
                .no_numbers()
                .no_special_chars(NAME_SPECIAL_CHARS_REGEX.clone())
                .no_multiple_spaces()
                .capitalize_first(),
            MessageSet::new()
                .with(Constraint::Required, "Full name is required")
                .with(
                    Constraint::MinLength,
                    "Full name must be at least {minLength} characters",
                )
                .with(
                    Constraint::MaxLength,
                    "Full name must be at most {maxLength} characters",
                )
                .with(
                    Constraint::Pattern,
                    "Full name can only contain letters, apostrophes and spaces",
                )
                .with(Constraint::NoLeadingSpace, "Full name cannot start with a space")
                .with(Constraint::NoNumbers, "Full name cannot contain numbers")
                .with(
                    Constraint::NoSpecialChars,
                    "Full name cannot contain special characters",
                )
                .with(
                    Constraint::NoMultipleSpaces,
                    "Full name cannot contain consecutive spaces",
                )
                .with(
                    Constraint::CapitalizeFirst,
                    "First letter of the name must be capitalized",
                ),
        ),
        (
            "phone",
            RuleSet::new()
                .required()
                .pattern(MOBILE_REGEX.clone())
                .no_repeating_digits(REPEATING_DIGITS_REGEX.clone()),
            MessageSet::new()
                .with(Constraint::Required, "Phone number is required")
                .with(
                    Constraint::Pattern,
                    "Please enter a valid 10-digit mobile number",
                )
                .with(
                    Constraint::NoRepeatingDigits,
                    "Phone number cannot be the same digit repeated",
                ),
        ),
        (
            "confirmPassword",
            RuleSet::new().required().match_field("password"),
            MessageSet::new()
                .with(Constraint::Required, "Please confirm your password")
                .with(Constraint::MatchField, "Passwords do not match"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_compile() {
        assert!(EMAIL_REGEX.is_match("user@example.com"));
        assert!(!EMAIL_REGEX.is_match("bad"));
        assert!(FULL_NAME_REGEX.is_match("O'Neil Smith"));
        assert!(MOBILE_REGEX.is_match("+919876543210"));
        assert!(MOBILE_REGEX.is_match("9876543210"));
        assert!(!MOBILE_REGEX.is_match("1234567890"));
        assert_eq!(PASSWORD_PATTERNS.len(), 4);
    }

    #[test]
    fn test_repeating_digits_pattern() {
        assert!(REPEATING_DIGITS_REGEX.is_match("9999999999"));
        assert!(REPEATING_DIGITS_REGEX.is_match("+916666666666"));
        assert!(!REPEATING_DIGITS_REGEX.is_match("9999999998"));
        assert!(!REPEATING_DIGITS_REGEX.is_match("99999"));
    }

    #[test]
    fn test_table_covers_seed_fields() {
        let fields: Vec<_> = default_table().into_iter().map(|(f, _, _)| f).collect();
        for expected in ["email", "password", "loginPassword", "fullName", "phone", "confirmPassword"] {
            assert!(fields.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_login_password_is_weaker() {
        let table = default_table();
        let login = &table.iter().find(|(f, _, _)| *f == "loginPassword").unwrap().1;
        assert!(login.patterns.is_none());
        assert_eq!(login.min_length, Some(6));
    }
}
