//! Declarative rule tables
//!
//! A JSON document describing rule and message sets per field:
//!
//! ```json
//! {
//!   "username": {
//!     "rules": { "required": true, "minLength": 3, "pattern": "^[a-z0-9_]+$" },
//!     "messages": { "minLength": "At least {minLength} characters" }
//!   }
//! }
//! ```
//!
//! Patterns are compiled when the table is compiled; one bad pattern rejects
//! the whole table.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{MessageSet, RuleSet, Transform};
use crate::error::{Result, RuleError};

/// Serializable form of a [`RuleSet`].
///
/// Closures cannot be described in JSON, so `transform` is a name
/// (`lowercaseTrim`, `trim`, `lowercase`) and `custom` is not available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_spaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_leading_space: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_multiple_spaces: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalize_first: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_special_chars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_repeating_digits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

fn compile_regex(field: &str, constraint: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| RuleError::invalid_pattern(field, constraint, e))
}

fn named_transform(field: &str, name: &str) -> Result<Transform> {
    match name {
        "lowercaseTrim" => Ok(Transform::lowercase_trim()),
        "trim" => Ok(Transform::trim()),
        "lowercase" => Ok(Transform::lowercase()),
        other => Err(RuleError::UnknownTransform {
            field: field.to_owned(),
            name: other.to_owned(),
        }),
    }
}

impl RuleSpec {
    /// Compiles the description into a [`RuleSet`] for `field`.
    pub fn compile(self, field: &str) -> Result<RuleSet> {
        let patterns = match self.patterns {
            Some(map) if map.is_empty() => {
                return Err(RuleError::EmptyPatterns {
                    field: field.to_owned(),
                });
            }
            Some(map) => Some(
                map.into_iter()
                    .map(|(name, src)| {
                        let re = compile_regex(field, &format!("patterns.{name}"), &src)?;
                        Ok((name, re))
                    })
                    .collect::<Result<BTreeMap<_, _>>>()?,
            ),
            None => None,
        };

        Ok(RuleSet {
            required: self.required,
            no_spaces: self.no_spaces,
            no_leading_space: self.no_leading_space,
            no_numbers: self.no_numbers,
            no_multiple_spaces: self.no_multiple_spaces,
            capitalize_first: self.capitalize_first,
            no_special_chars: self
                .no_special_chars
                .map(|p| compile_regex(field, "noSpecialChars", &p))
                .transpose()?,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self
                .pattern
                .map(|p| compile_regex(field, "pattern", &p))
                .transpose()?,
            no_repeating_digits: self
                .no_repeating_digits
                .map(|p| compile_regex(field, "noRepeatingDigits", &p))
                .transpose()?,
            patterns,
            match_field: self.match_field,
            transform: self
                .transform
                .map(|name| named_transform(field, &name))
                .transpose()?,
            custom: None,
        })
    }
}

/// Rules and messages for one field in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default)]
    pub rules: RuleSpec,
    #[serde(default)]
    pub messages: MessageSet,
}

/// A whole rule document, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    pub fields: BTreeMap<String, FieldSpec>,
}

impl RuleTable {
    /// Parses a table from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compiles every field, failing on the first bad rule.
    pub fn compile(self) -> Result<Vec<(String, RuleSet, MessageSet)>> {
        self.fields
            .into_iter()
            .map(|(field, entry)| {
                let rules = entry.rules.compile(&field)?;
                Ok((field, rules, entry.messages))
            })
            .collect()
    }
}
