//! Constraint keys
//!
//! Every constraint a rule set can carry has a stable camelCase key. The key
//! is the `code` of the [`ValidationError`](crate::foundation::ValidationError)
//! a failing check produces and the key messages are registered under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named constraint.
///
/// Variants are declared in pipeline order: when a value violates several
/// constraints, the one declared first is reported. `Custom` only runs on the
/// custom-rule extension path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Constraint {
    Required,
    NoSpaces,
    NoLeadingSpace,
    NoNumbers,
    NoSpecialChars,
    NoMultipleSpaces,
    CapitalizeFirst,
    MinLength,
    MaxLength,
    Pattern,
    NoRepeatingDigits,
    Patterns,
    MatchField,
    Custom,
}

impl Constraint {
    /// All constraints in evaluation order.
    pub const ALL: [Constraint; 14] = [
        Constraint::Required,
        Constraint::NoSpaces,
        Constraint::NoLeadingSpace,
        Constraint::NoNumbers,
        Constraint::NoSpecialChars,
        Constraint::NoMultipleSpaces,
        Constraint::CapitalizeFirst,
        Constraint::MinLength,
        Constraint::MaxLength,
        Constraint::Pattern,
        Constraint::NoRepeatingDigits,
        Constraint::Patterns,
        Constraint::MatchField,
        Constraint::Custom,
    ];

    /// Returns the camelCase key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::NoSpaces => "noSpaces",
            Self::NoLeadingSpace => "noLeadingSpace",
            Self::NoNumbers => "noNumbers",
            Self::NoSpecialChars => "noSpecialChars",
            Self::NoMultipleSpaces => "noMultipleSpaces",
            Self::CapitalizeFirst => "capitalizeFirst",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::NoRepeatingDigits => "noRepeatingDigits",
            Self::Patterns => "patterns",
            Self::MatchField => "matchField",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown constraint key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown constraint '{0}'")]
pub struct UnknownConstraint(pub String);

impl FromStr for Constraint {
    type Err = UnknownConstraint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownConstraint(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_parse_back() {
        for constraint in Constraint::ALL {
            assert_eq!(constraint.key().parse::<Constraint>(), Ok(constraint));
        }
        assert!("minlength".parse::<Constraint>().is_err());
    }

    #[test]
    fn test_declaration_order_is_pipeline_order() {
        let mut sorted = Constraint::ALL;
        sorted.sort();
        assert_eq!(sorted, Constraint::ALL);
        assert!(Constraint::MinLength < Constraint::Pattern);
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&Constraint::NoRepeatingDigits).unwrap();
        assert_eq!(json, "\"noRepeatingDigits\"");
        let back: Constraint = serde_json::from_str("\"matchField\"").unwrap();
        assert_eq!(back, Constraint::MatchField);
    }
}
