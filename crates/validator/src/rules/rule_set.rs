//! Rule sets
//!
//! A [`RuleSet`] is the collection of constraints registered for one field.
//! Every constraint is optional; registering again shallow-merges the new
//! constraints over the old ones.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use super::{Constraint, FormValues};

// ============================================================================
// TRANSFORM
// ============================================================================

/// A pure `value -> value` function applied before a field's checks.
///
/// The transformed value is only used for checking; the caller's value is
/// never changed.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Lower-cases and trims the value.
    #[must_use]
    pub fn lowercase_trim() -> Self {
        Self::new(|v| v.trim().to_lowercase())
    }

    /// Trims surrounding whitespace.
    #[must_use]
    pub fn trim() -> Self {
        Self::new(|v| v.trim().to_owned())
    }

    /// Lower-cases the value.
    #[must_use]
    pub fn lowercase() -> Self {
        Self::new(str::to_lowercase)
    }

    /// Applies the transform.
    pub fn apply(&self, value: &str) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(<function>)")
    }
}

// ============================================================================
// CUSTOM PREDICATE
// ============================================================================

/// A `(value, form) -> bool` predicate used by custom rules.
///
/// Returns `true` when the value is acceptable.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&str, &FormValues) -> bool + Send + Sync>);

impl Predicate {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluates the predicate.
    pub fn test(&self, value: &str, form: &FormValues) -> bool {
        (self.0)(value, form)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(<function>)")
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Constraints registered for one field.
///
/// `None` means "not configured". Merging only overwrites keys that are
/// `Some` in the incoming set; a new `patterns` map replaces the old one
/// wholesale.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::rules::RuleSet;
///
/// let mut rules = RuleSet::new().required().min_length(6);
/// rules.merge(RuleSet::new().max_length(10));
/// rules.merge(RuleSet::new().min_length(8));
///
/// assert_eq!(rules.min_length, Some(8));
/// assert_eq!(rules.max_length, Some(10));
/// assert_eq!(rules.required, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub required: Option<bool>,
    pub no_spaces: Option<bool>,
    pub no_leading_space: Option<bool>,
    pub no_numbers: Option<bool>,
    pub no_multiple_spaces: Option<bool>,
    pub capitalize_first: Option<bool>,
    /// Fails if it matches.
    pub no_special_chars: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Fails if it does not match.
    pub pattern: Option<Regex>,
    /// Fails if it matches.
    pub no_repeating_digits: Option<Regex>,
    /// Fails as a unit if any sub-pattern does not match.
    pub patterns: Option<BTreeMap<String, Regex>>,
    /// Name of the field whose value this one must equal.
    pub match_field: Option<String>,
    pub transform: Option<Transform>,
    /// Only evaluated on the custom-rule extension path.
    pub custom: Option<Predicate>,
}

macro_rules! merge_fields {
    ($target:ident, $incoming:ident; $($field:ident),+ $(,)?) => {
        $(
            if $incoming.$field.is_some() {
                $target.$field = $incoming.$field;
            }
        )+
    };
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merges `other` over `self`.
    pub fn merge(&mut self, other: RuleSet) {
        merge_fields!(self, other;
            required,
            no_spaces,
            no_leading_space,
            no_numbers,
            no_multiple_spaces,
            capitalize_first,
            no_special_chars,
            min_length,
            max_length,
            pattern,
            no_repeating_digits,
            patterns,
            match_field,
            transform,
            custom,
        );
    }

    /// Returns true if no constraint is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }

    /// Returns the configured constraints in pipeline order.
    ///
    /// Flags set to `false` count as not configured.
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let flag = |f: Option<bool>| f.unwrap_or(false);
        let present = [
            (Constraint::Required, flag(self.required)),
            (Constraint::NoSpaces, flag(self.no_spaces)),
            (Constraint::NoLeadingSpace, flag(self.no_leading_space)),
            (Constraint::NoNumbers, flag(self.no_numbers)),
            (Constraint::NoSpecialChars, self.no_special_chars.is_some()),
            (Constraint::NoMultipleSpaces, flag(self.no_multiple_spaces)),
            (Constraint::CapitalizeFirst, flag(self.capitalize_first)),
            (Constraint::MinLength, self.min_length.is_some()),
            (Constraint::MaxLength, self.max_length.is_some()),
            (Constraint::Pattern, self.pattern.is_some()),
            (Constraint::NoRepeatingDigits, self.no_repeating_digits.is_some()),
            (Constraint::Patterns, self.patterns.is_some()),
            (Constraint::MatchField, self.match_field.is_some()),
            (Constraint::Custom, self.custom.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(c, on)| on.then_some(c))
            .collect()
    }

    /// Returns true if the field must be non-blank.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    // ------------------------------------------------------------------------
    // Builder methods
    // ------------------------------------------------------------------------

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Explicitly marks the field as optional, overriding an earlier `required`.
    pub fn optional(mut self) -> Self {
        self.required = Some(false);
        self
    }

    pub fn no_spaces(mut self) -> Self {
        self.no_spaces = Some(true);
        self
    }

    pub fn no_leading_space(mut self) -> Self {
        self.no_leading_space = Some(true);
        self
    }

    pub fn no_numbers(mut self) -> Self {
        self.no_numbers = Some(true);
        self
    }

    pub fn no_multiple_spaces(mut self) -> Self {
        self.no_multiple_spaces = Some(true);
        self
    }

    pub fn capitalize_first(mut self) -> Self {
        self.capitalize_first = Some(true);
        self
    }

    pub fn no_special_chars(mut self, pattern: Regex) -> Self {
        self.no_special_chars = Some(pattern);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn no_repeating_digits(mut self, pattern: Regex) -> Self {
        self.no_repeating_digits = Some(pattern);
        self
    }

    /// Sets the compound constraint. Replaces any earlier sub-patterns.
    pub fn patterns<I, K>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = (K, Regex)>,
        K: Into<String>,
    {
        self.patterns = Some(
            patterns
                .into_iter()
                .map(|(name, re)| (name.into(), re))
                .collect(),
        );
        self
    }

    pub fn match_field(mut self, field: impl Into<String>) -> Self {
        self.match_field = Some(field.into());
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn custom(mut self, predicate: Predicate) -> Self {
        self.custom = Some(predicate);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_untouched_keys() {
        let mut rules = RuleSet::new().min_length(6);
        rules.merge(RuleSet::new().max_length(10));
        assert_eq!(rules.min_length, Some(6));
        assert_eq!(rules.max_length, Some(10));

        rules.merge(RuleSet::new().min_length(8));
        assert_eq!(rules.min_length, Some(8));
        assert_eq!(rules.max_length, Some(10));
    }

    #[test]
    fn test_merge_replaces_patterns_wholesale() {
        let mut rules = RuleSet::new().patterns([
            ("upper", Regex::new("[A-Z]").unwrap()),
            ("digit", Regex::new("[0-9]").unwrap()),
        ]);
        rules.merge(RuleSet::new().patterns([("lower", Regex::new("[a-z]").unwrap())]));

        let names: Vec<_> = rules.patterns.unwrap().into_keys().collect();
        assert_eq!(names, vec!["lower".to_owned()]);
    }

    #[test]
    fn test_optional_overrides_required() {
        let mut rules = RuleSet::new().required();
        rules.merge(RuleSet::new().optional());
        assert!(!rules.is_required());
    }

    #[test]
    fn test_constraints_in_pipeline_order() {
        let rules = RuleSet::new()
            .match_field("password")
            .min_length(6)
            .required()
            .no_spaces();
        assert_eq!(
            rules.constraints(),
            vec![
                Constraint::Required,
                Constraint::NoSpaces,
                Constraint::MinLength,
                Constraint::MatchField,
            ]
        );
        assert!(RuleSet::new().is_empty());
    }

    #[test]
    fn test_transform_and_predicate() {
        assert_eq!(Transform::lowercase_trim().apply("  A@B.COM "), "a@b.com");
        let p = Predicate::new(|v, form| form.get("other").is_some_and(|o| o != v));
        let form = FormValues::from([("other".to_owned(), "x".to_owned())]);
        assert!(p.test("y", &form));
        assert!(!p.test("x", &form));
    }
}
