//! Field and form evaluation
//!
//! [`FormValidator`] runs a field's rule set through a fixed pipeline and
//! stops at the first failing check:
//!
//! 1. `transform` (checks see the transformed value; the caller's is untouched)
//! 2. `required`
//! 3. blank optional values pass immediately
//! 4. `noSpaces`, `noLeadingSpace`, `noNumbers`, `noSpecialChars`,
//!    `noMultipleSpaces`, `capitalizeFirst`
//! 5. `minLength`, `maxLength`
//! 6. `pattern`, `noRepeatingDigits`, `patterns`
//! 7. `matchField`, compared against the caller's original value
//!
//! When a value violates several constraints the earliest one is reported.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::foundation::{Validate, ValidationError, ValidationErrors, first_failure};
use crate::registry::RuleRegistry;
use crate::rules::{Constraint, CustomRule, FormValues, RuleSet, render_template};
use crate::validators::{
    AllPatterns, Matches, MatchesField, NoRepeatingDigits, NoSpecialChars, capitalize_first,
    max_length, min_length, no_leading_space, no_multiple_spaces, no_numbers, no_spaces,
    required,
};

/// Three-way UI classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    /// Blank input; nothing to report yet.
    Neutral,
    Valid,
    Invalid,
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Neutral => "neutral",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        })
    }
}

fn as_check<V: Validate<Input = str>>(check: &Option<V>) -> Option<&dyn Validate<Input = str>> {
    check.as_ref().map(|c| c as &dyn Validate<Input = str>)
}

/// Runs the standard pipeline. The returned error carries the checker's
/// default message; rendering happens in [`FormValidator::check_field`].
fn run_pipeline(rules: &RuleSet, value: &str, form: &FormValues) -> Result<(), ValidationError> {
    let transformed = rules.transform.as_ref().map(|t| t.apply(value));
    let subject = transformed.as_deref().unwrap_or(value);

    if rules.is_required() {
        required().validate(subject)?;
    }
    if subject.trim().is_empty() {
        return Ok(());
    }

    let on = |flag: Option<bool>| flag.unwrap_or(false);
    let no_spaces = on(rules.no_spaces).then(no_spaces);
    let no_leading_space = on(rules.no_leading_space).then(no_leading_space);
    let no_numbers = on(rules.no_numbers).then(no_numbers);
    let no_special_chars = rules.no_special_chars.clone().map(NoSpecialChars::new);
    let no_multiple_spaces = on(rules.no_multiple_spaces).then(no_multiple_spaces);
    let capitalize_first = on(rules.capitalize_first).then(capitalize_first);
    let min_length = rules.min_length.map(min_length);
    let max_length = rules.max_length.map(max_length);
    let pattern = rules.pattern.clone().map(Matches::new);
    let no_repeating_digits = rules.no_repeating_digits.clone().map(NoRepeatingDigits::new);
    let patterns = rules.patterns.clone().map(AllPatterns::new);

    let checks = [
        as_check(&no_spaces),
        as_check(&no_leading_space),
        as_check(&no_numbers),
        as_check(&no_special_chars),
        as_check(&no_multiple_spaces),
        as_check(&capitalize_first),
        as_check(&min_length),
        as_check(&max_length),
        as_check(&pattern),
        as_check(&no_repeating_digits),
        as_check(&patterns),
    ];
    first_failure(subject, checks.iter().flatten().copied())?;

    if let Some(other) = rules.match_field.as_deref() {
        let expected = form.get(other).map(String::as_str);
        MatchesField::new(other, expected).validate(value)?;
    }

    Ok(())
}

/// Evaluates fields and forms against a [`RuleRegistry`].
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::evaluator::{FieldState, FormValidator};
/// use fieldrule_validator::rules::FormValues;
///
/// let validator = FormValidator::default();
/// let form = FormValues::new();
///
/// assert_eq!(validator.validate_field("email", "", &form), "Email is required");
/// assert_eq!(validator.validate_field("email", "  USER@Example.COM ", &form), "");
/// assert_eq!(validator.field_state("email", "   ", &form), FieldState::Neutral);
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
    registry: Arc<RuleRegistry>,
}

impl FormValidator {
    /// Creates a validator over a shared registry.
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a validator over a fresh registry built from `config`.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::new(Arc::new(RuleRegistry::with_config(config)))
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    fn render(&self, field: &str, error: ValidationError) -> ValidationError {
        let messages = self.registry.messages(field);
        let template = Constraint::from_str(&error.code)
            .ok()
            .and_then(|c| messages.get(c))
            .unwrap_or(self.registry.config().fallback_message.as_str());
        let message = render_template(template, field, &error);
        error.with_message(message).with_field(field.to_owned())
    }

    // ------------------------------------------------------------------------
    // Single field
    // ------------------------------------------------------------------------

    /// Evaluates one field and returns the first failure with its rendered
    /// message.
    ///
    /// Unregistered fields pass unless the config is strict.
    pub fn check_field(&self, field: &str, value: &str, form: &FormValues) -> Result<(), ValidationError> {
        let config = self.registry.config();
        if config.is_strict() && !self.registry.contains(field) {
            tracing::warn!(field, "rejecting unregistered field");
            return Err(ValidationError::new(
                "unknownField",
                format!("`{field}` is not a registered field"),
            )
            .with_field(field.to_owned()));
        }

        let rules = self.registry.rule(field);
        run_pipeline(&rules, value, form).map_err(|error| {
            tracing::trace!(field, code = %error.code, "constraint failed");
            self.render(field, error)
        })
    }

    /// Evaluates one field; an empty string means valid.
    pub fn validate_field(&self, field: &str, value: &str, form: &FormValues) -> String {
        match self.check_field(field, value, form) {
            Ok(()) => String::new(),
            Err(error) => error.message.into_owned(),
        }
    }

    /// Classifies a field for display.
    ///
    /// Blank input is always [`FieldState::Neutral`], even for required
    /// fields.
    pub fn field_state(&self, field: &str, value: &str, form: &FormValues) -> FieldState {
        if value.trim().is_empty() {
            FieldState::Neutral
        } else if self.check_field(field, value, form).is_err() {
            FieldState::Invalid
        } else {
            FieldState::Valid
        }
    }

    // ------------------------------------------------------------------------
    // Whole form
    // ------------------------------------------------------------------------

    /// Evaluates the selected fields, or every key of `form` in sorted order.
    ///
    /// A selected field missing from `form` is evaluated as blank.
    pub fn check_form(&self, form: &FormValues, fields: Option<&[&str]>) -> ValidationErrors {
        let names: Vec<&str> = match fields {
            Some(fields) => fields.to_vec(),
            None => {
                let mut keys: Vec<&str> = form.keys().map(String::as_str).collect();
                keys.sort_unstable();
                keys
            }
        };

        names
            .into_iter()
            .filter_map(|field| {
                let value = form.get(field).map_or("", String::as_str);
                self.check_field(field, value, form).err()
            })
            .collect()
    }

    /// Returns `field -> message` for every failing field.
    pub fn validate_form(&self, form: &FormValues, fields: Option<&[&str]>) -> BTreeMap<String, String> {
        self.check_form(form, fields).into_messages()
    }

    /// Returns true when [`validate_form`](Self::validate_form) reports nothing.
    pub fn is_form_valid(&self, form: &FormValues, fields: Option<&[&str]>) -> bool {
        self.validate_form(form, fields).is_empty()
    }

    /// Evaluates the form and fails with every field error at once.
    ///
    /// Suited to submit handlers that propagate with `?`.
    pub fn ensure_form_valid(
        &self,
        form: &FormValues,
        fields: Option<&[&str]>,
    ) -> Result<(), ValidationErrors> {
        self.check_form(form, fields).into_result(())
    }

    // ------------------------------------------------------------------------
    // Custom rules
    // ------------------------------------------------------------------------

    /// Registers a `custom` predicate and message for a field.
    pub fn create_custom_rule<F>(&self, field: &str, predicate: F, message: impl Into<String>)
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        self.registry.create_custom_rule(field, predicate, message);
    }

    /// Runs the standard pipeline, then `rules` in order.
    ///
    /// Custom predicates receive the caller's original value and are never
    /// invoked when the standard pipeline already failed.
    pub fn check_with_custom_rules(
        &self,
        field: &str,
        value: &str,
        rules: &[CustomRule],
        form: &FormValues,
    ) -> Result<(), ValidationError> {
        self.check_field(field, value, form)?;

        match rules.iter().find(|rule| !rule.passes(value, form)) {
            None => Ok(()),
            Some(rule) => {
                tracing::trace!(field, code = "custom", "constraint failed");
                let error = ValidationError::custom("");
                let message = render_template(&rule.message, field, &error);
                Err(error.with_message(message).with_field(field.to_owned()))
            }
        }
    }

    /// String form of [`check_with_custom_rules`](Self::check_with_custom_rules).
    pub fn validate_with_custom_rules(
        &self,
        field: &str,
        value: &str,
        rules: &[CustomRule],
        form: &FormValues,
    ) -> String {
        match self.check_with_custom_rules(field, value, rules, form) {
            Ok(()) => String::new(),
            Err(error) => error.message.into_owned(),
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(Arc::new(RuleRegistry::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MessageSet;
    use regex::Regex;

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_transform_applies_before_checks() {
        let validator = FormValidator::default();
        let result = validator.check_field("email", "  USER@EXAMPLE.COM  ", &FormValues::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_required_then_empty_optional() {
        let registry = Arc::new(RuleRegistry::empty());
        registry
            .add_rule("nickname", RuleSet::new().min_length(3).no_numbers())
            .unwrap();
        let validator = FormValidator::new(registry);

        assert_eq!(validator.validate_field("nickname", "   ", &FormValues::new()), "");
        assert_eq!(
            validator
                .check_field("nickname", "a1", &FormValues::new())
                .unwrap_err()
                .code,
            "noNumbers"
        );
    }

    #[test]
    fn test_earliest_constraint_wins() {
        let validator = FormValidator::default();
        // Violates noLeadingSpace, noNumbers and capitalizeFirst.
        let err = validator
            .check_field("fullName", " j0hn", &FormValues::new())
            .unwrap_err();
        assert_eq!(err.code, "noLeadingSpace");
        assert_eq!(err.field.as_deref(), Some("fullName"));
    }

    #[test]
    fn test_message_rendering_and_fallback() {
        let registry = Arc::new(RuleRegistry::empty());
        registry
            .add_rule("code", RuleSet::new().min_length(4).max_length(6))
            .unwrap();
        registry.add_message(
            "code",
            MessageSet::new().with(Constraint::MinLength, "{field} needs {minLength}"),
        );
        let validator = FormValidator::new(registry);

        assert_eq!(validator.validate_field("code", "ab", &FormValues::new()), "code needs 4");
        assert_eq!(
            validator.validate_field("code", "abcdefg", &FormValues::new()),
            "code is invalid"
        );
    }

    #[test]
    fn test_match_field_uses_original_value() {
        let registry = Arc::new(RuleRegistry::empty());
        registry
            .add_rule(
                "confirm",
                RuleSet::new()
                    .match_field("secret")
                    .transform(crate::rules::Transform::lowercase()),
            )
            .unwrap();
        let validator = FormValidator::new(registry);
        let values = form(&[("secret", "AbC")]);

        assert!(validator.check_field("confirm", "AbC", &values).is_ok());
        assert!(validator.check_field("confirm", "abc", &values).is_err());
    }

    #[test]
    fn test_match_field_missing_reference_fails() {
        let validator = FormValidator::default();
        let err = validator
            .check_field("confirmPassword", "Secret1!", &FormValues::new())
            .unwrap_err();
        assert_eq!(err.code, "matchField");
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn test_strict_mode_rejects_unknown_fields() {
        let validator = FormValidator::with_config(ValidatorConfig::default().strict());
        let err = validator
            .check_field("nickname", "bob", &FormValues::new())
            .unwrap_err();
        assert_eq!(err.code, "unknownField");
        assert_eq!(err.message, "`nickname` is not a registered field");
        assert!(validator.check_field("email", "a@b.co", &FormValues::new()).is_ok());
    }

    #[test]
    fn test_lenient_mode_passes_unknown_fields() {
        let validator = FormValidator::default();
        assert_eq!(validator.validate_field("nickname", "anything", &FormValues::new()), "");
    }

    #[test]
    fn test_field_state() {
        let validator = FormValidator::default();
        let empty = FormValues::new();
        assert_eq!(validator.field_state("email", "", &empty), FieldState::Neutral);
        assert_eq!(validator.field_state("email", "nope", &empty), FieldState::Invalid);
        assert_eq!(validator.field_state("email", "a@b.co", &empty), FieldState::Valid);
        assert_eq!(FieldState::Invalid.to_string(), "invalid");
    }

    #[test]
    fn test_check_form_sorted_keys() {
        let validator = FormValidator::default();
        let values = form(&[("phone", ""), ("email", "bad")]);
        let errors = validator.check_form(&values, None);
        let fields: Vec<_> = errors
            .errors()
            .iter()
            .filter_map(|e| e.field.as_deref())
            .collect();
        assert_eq!(fields, vec!["email", "phone"]);
    }

    #[test]
    fn test_ensure_form_valid() {
        let validator = FormValidator::default();
        assert_eq!(
            validator.ensure_form_valid(&form(&[("email", "a@b.co")]), None),
            Ok(())
        );

        let errors = validator
            .ensure_form_valid(&form(&[("email", "bad"), ("phone", "")]), None)
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("phone").unwrap().code, "required");
    }

    #[test]
    fn test_custom_rules_run_after_standard() {
        let registry = Arc::new(RuleRegistry::empty());
        registry
            .add_rule("tag", RuleSet::new().pattern(Regex::new("^[a-z]+$").unwrap()))
            .unwrap();
        let validator = FormValidator::new(registry);
        let rules = [
            CustomRule::new(|v, _| v.len() < 8, "{field} is too long"),
            CustomRule::new(|v, _| v != "admin", "Reserved"),
        ];

        let empty = FormValues::new();
        assert_eq!(validator.validate_with_custom_rules("tag", "ok", &rules, &empty), "");
        assert_eq!(
            validator.validate_with_custom_rules("tag", "admin", &rules, &empty),
            "Reserved"
        );
        assert_eq!(
            validator.validate_with_custom_rules("tag", "abcdefghij", &rules, &empty),
            "tag is too long"
        );
        assert_eq!(
            validator
                .check_with_custom_rules("tag", "Nope", &rules, &empty)
                .unwrap_err()
                .code,
            "pattern"
        );
    }
}
