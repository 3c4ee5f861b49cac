//! Error types for rule registration
//!
//! These are setup faults: a rule that cannot be compiled is rejected when it
//! is registered, so evaluation itself never fails.
use thiserror::Error;

/// Result type for registration operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised while building or registering rules
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RuleError {
    /// A regular expression in a rule did not compile
    #[error("Invalid pattern for '{field}.{constraint}': {source}")]
    InvalidPattern {
        /// The field the rule belongs to
        field: String,
        /// The constraint key, e.g. `pattern` or `patterns.uppercase`
        constraint: String,
        /// The regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A compound `patterns` constraint was given no sub-patterns
    #[error("Compound pattern rule for '{field}' has no sub-patterns")]
    EmptyPatterns {
        /// The field the rule belongs to
        field: String,
    },

    /// A declarative transform name is not known
    #[error("Unknown transform '{name}' for field '{field}'")]
    UnknownTransform {
        /// The field the rule belongs to
        field: String,
        /// The transform name as written
        name: String,
    },

    /// A rule table or config document could not be parsed
    #[error("Failed to parse rule document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RuleError {
    /// Creates an invalid-pattern error.
    pub fn invalid_pattern(
        field: impl Into<String>,
        constraint: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            constraint: constraint.into(),
            source,
        }
    }

    /// Returns the field this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { field, .. }
            | Self::EmptyPatterns { field }
            | Self::UnknownTransform { field, .. } => Some(field),
            Self::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RuleError::invalid_pattern("phone", "pattern", source);
        assert_eq!(err.field(), Some("phone"));
        assert!(err.to_string().starts_with("Invalid pattern for 'phone.pattern'"));
    }

    #[test]
    fn test_parse_has_no_field() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RuleError::from(source);
        assert_eq!(err.field(), None);
    }
}
