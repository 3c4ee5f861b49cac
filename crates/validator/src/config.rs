//! Validator configuration
//!
//! Built in code or parsed from JSON:
//!
//! ```json
//! { "unknownFields": "strict", "seedDefaults": false }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How fields with no registered rules are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Unregistered fields always validate.
    #[default]
    Lenient,
    /// Unregistered fields fail with code `unknownField`.
    Strict,
}

/// Registry and evaluator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Treatment of fields that were never registered.
    pub unknown_fields: UnknownFieldPolicy,
    /// Seed the default rule table when the registry is built.
    pub seed_defaults: bool,
    /// Template used when a failing constraint has no registered message.
    pub fallback_message: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Lenient,
            seed_defaults: true,
            fallback_message: "{field} is invalid".to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Parses a config from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fails unregistered fields instead of passing them.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.unknown_fields = UnknownFieldPolicy::Strict;
        self
    }

    /// Builds the registry without the default rule table.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_defaults(mut self) -> Self {
        self.seed_defaults = false;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_fallback_message(mut self, template: impl Into<String>) -> Self {
        self.fallback_message = template.into();
        self
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.unknown_fields == UnknownFieldPolicy::Strict
    }
}
