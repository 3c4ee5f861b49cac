//! Rule registry
//!
//! Owns the `field -> (RuleSet, MessageSet)` mapping. Writes shallow-merge
//! into the stored sets under a write lock; reads hand out `Arc` snapshots so
//! evaluation never holds the lock.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ValidatorConfig;
use crate::error::{Result, RuleError};
use crate::foundation::ValidationError;
use crate::rules::{
    Constraint, CustomRule, FormValues, MessageSet, Predicate, RuleSet, RuleTable,
    default_table, render_template,
};

#[derive(Debug, Clone, Default)]
struct FieldEntry {
    rules: Arc<RuleSet>,
    messages: Arc<MessageSet>,
}

impl FieldEntry {
    fn merge(&mut self, rules: Option<RuleSet>, messages: Option<MessageSet>) {
        if let Some(rules) = rules {
            Arc::make_mut(&mut self.rules).merge(rules);
        }
        if let Some(messages) = messages {
            Arc::make_mut(&mut self.messages).merge(messages);
        }
    }
}

fn check_rules(field: &str, rules: &RuleSet) -> Result<()> {
    if rules.patterns.as_ref().is_some_and(BTreeMap::is_empty) {
        return Err(RuleError::EmptyPatterns {
            field: field.to_owned(),
        });
    }
    Ok(())
}

/// Thread-safe store of rule and message sets.
///
/// # Thread Safety
///
/// Uses `parking_lot::RwLock`: many concurrent readers or one writer. Later
/// merges to the same field win.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::registry::RuleRegistry;
/// use fieldrule_validator::rules::{Constraint, MessageSet, RuleSet};
///
/// let registry = RuleRegistry::new();
/// registry.add_rule("username", RuleSet::new().required().min_length(3))?;
/// registry.add_message(
///     "username",
///     MessageSet::new().with(Constraint::MinLength, "At least {minLength} characters"),
/// );
///
/// assert_eq!(registry.rule("username").min_length, Some(3));
/// assert!(registry.rule("never-registered").is_empty());
/// # Ok::<(), fieldrule_validator::error::RuleError>(())
/// ```
#[derive(Debug)]
pub struct RuleRegistry {
    fields: RwLock<HashMap<String, FieldEntry>>,
    config: ValidatorConfig,
}

impl RuleRegistry {
    /// Creates a registry seeded with the default rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a registry with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_config(ValidatorConfig::default().without_defaults())
    }

    /// Creates a registry from a config, seeding defaults if it asks for them.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        let mut fields = HashMap::new();
        if config.seed_defaults {
            for (field, rules, messages) in default_table() {
                fields.insert(
                    field.to_owned(),
                    FieldEntry {
                        rules: Arc::new(rules),
                        messages: Arc::new(messages),
                    },
                );
            }
            tracing::debug!(fields = fields.len(), "seeded default rule table");
        }

        Self {
            fields: RwLock::new(fields),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    /// Shallow-merges `rules` into the field's rule set, creating it if absent.
    ///
    /// # Errors
    ///
    /// [`RuleError::EmptyPatterns`] if `rules` carries a compound constraint
    /// with no sub-patterns. Nothing is merged in that case.
    pub fn add_rule(&self, field: impl Into<String>, rules: RuleSet) -> Result<()> {
        let field = field.into();
        check_rules(&field, &rules)?;

        tracing::debug!(field = %field, constraints = ?rules.constraints(), "merging rule set");
        self.fields
            .write()
            .entry(field)
            .or_default()
            .merge(Some(rules), None);
        Ok(())
    }

    /// Shallow-merges `messages` into the field's message set.
    ///
    /// Templates are plain strings and are only rendered at evaluation time,
    /// so a message merge cannot fail.
    pub fn add_message(&self, field: impl Into<String>, messages: MessageSet) {
        let field = field.into();
        tracing::debug!(field = %field, templates = messages.len(), "merging message set");
        self.fields
            .write()
            .entry(field)
            .or_default()
            .merge(None, Some(messages));
    }

    /// Registers a `custom` predicate and its message for a field.
    ///
    /// The rule and message are merged under one lock, so readers never see
    /// one without the other.
    pub fn create_custom_rule<F>(
        &self,
        field: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        let field = field.into();
        tracing::debug!(field = %field, "registering custom rule");
        self.fields.write().entry(field).or_default().merge(
            Some(RuleSet::new().custom(Predicate::new(predicate))),
            Some(MessageSet::new().with(Constraint::Custom, message)),
        );
    }

    /// Loads a JSON rule table and merges every field in it.
    ///
    /// All or nothing: the table is parsed and compiled before the lock is
    /// taken, so a malformed document registers nothing.
    ///
    /// # Errors
    ///
    /// [`RuleError::Parse`] for malformed JSON or unknown keys,
    /// [`RuleError::InvalidPattern`], [`RuleError::EmptyPatterns`] or
    /// [`RuleError::UnknownTransform`] for a bad rule.
    pub fn load_json(&self, json: &str) -> Result<usize> {
        let compiled = RuleTable::from_json(json)?.compile()?;
        let count = compiled.len();

        let mut fields = self.fields.write();
        for (field, rules, messages) in compiled {
            fields.entry(field).or_default().merge(Some(rules), Some(messages));
        }
        drop(fields);

        tracing::debug!(fields = count, "loaded rule table");
        Ok(count)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Returns the field's rule set, or an empty one if it was never registered.
    pub fn rule(&self, field: &str) -> Arc<RuleSet> {
        self.fields
            .read()
            .get(field)
            .map(|entry| Arc::clone(&entry.rules))
            .unwrap_or_default()
    }

    /// Returns the field's message set, or an empty one.
    pub fn messages(&self, field: &str) -> Arc<MessageSet> {
        self.fields
            .read()
            .get(field)
            .map(|entry| Arc::clone(&entry.messages))
            .unwrap_or_default()
    }

    /// Returns true if anything was ever registered for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.read().contains_key(field)
    }

    /// Lists registered field names, sorted.
    pub fn fields(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns the field's registered `custom` predicate as a [`CustomRule`].
    ///
    /// The message falls back to the configured fallback template.
    pub fn custom_rule(&self, field: &str) -> Option<CustomRule> {
        let fields = self.fields.read();
        let entry = fields.get(field)?;
        let predicate = entry.rules.custom.clone()?;
        let message = match entry.messages.get(Constraint::Custom) {
            Some(template) => template.to_owned(),
            None => render_template(
                &self.config.fallback_message,
                field,
                &ValidationError::custom(""),
            ),
        };
        Some(CustomRule::from_predicate(predicate, message))
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
