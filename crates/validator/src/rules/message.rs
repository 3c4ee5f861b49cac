//! Message sets and template rendering
//!
//! Messages are templates keyed by constraint. Placeholders in braces are
//! filled from the failing check's parameters (`{minLength}`, `{maxLength}`,
//! `{matchField}`) or the field name (`{field}`). Unknown placeholders are
//! left as written.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Constraint;
use crate::foundation::ValidationError;

/// Message templates registered for one field.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::rules::{Constraint, MessageSet};
///
/// let messages = MessageSet::new()
///     .with(Constraint::Required, "Password is required")
///     .with(Constraint::MinLength, "At least {minLength} characters");
///
/// assert_eq!(messages.get(Constraint::Required), Some("Password is required"));
/// assert_eq!(messages.get(Constraint::Pattern), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageSet {
    messages: BTreeMap<Constraint, String>,
}

impl MessageSet {
    /// Creates an empty message set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one template.
    pub fn with(mut self, constraint: Constraint, template: impl Into<String>) -> Self {
        self.set(constraint, template);
        self
    }

    /// Sets one template in place.
    pub fn set(&mut self, constraint: Constraint, template: impl Into<String>) {
        self.messages.insert(constraint, template.into());
    }

    /// Returns the template for a constraint.
    #[must_use]
    pub fn get(&self, constraint: Constraint) -> Option<&str> {
        self.messages.get(&constraint).map(String::as_str)
    }

    /// Shallow-merges `other` over `self`; existing keys not in `other` stay.
    pub fn merge(&mut self, other: MessageSet) {
        self.messages.extend(other.messages);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterates templates in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Constraint, &str)> {
        self.messages.iter().map(|(c, m)| (*c, m.as_str()))
    }
}

impl FromIterator<(Constraint, String)> for MessageSet {
    fn from_iter<I: IntoIterator<Item = (Constraint, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// Fills `{name}` placeholders in `template`.
///
/// `{field}` resolves to `field`; every other name is looked up in the
/// error's parameters.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::foundation::ValidationError;
/// use fieldrule_validator::rules::render_template;
///
/// let error = ValidationError::min_length(6, 2);
/// assert_eq!(
///     render_template("{field} needs {minLength}+ chars {unknown}", "password", &error),
///     "password needs 6+ chars {unknown}",
/// );
/// ```
#[must_use]
pub fn render_template(template: &str, field: &str, error: &ValidationError) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        let value = if name == "field" {
            Some(field)
        } else {
            error.param(name)
        };
        match value {
            Some(v) => out.push_str(v),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_existing_keys() {
        let mut messages = MessageSet::new()
            .with(Constraint::Required, "a")
            .with(Constraint::Pattern, "b");
        messages.merge(MessageSet::new().with(Constraint::Pattern, "c"));

        assert_eq!(messages.get(Constraint::Required), Some("a"));
        assert_eq!(messages.get(Constraint::Pattern), Some("c"));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_render_max_length() {
        let error = ValidationError::max_length(50, 51);
        assert_eq!(
            render_template("Name must be at most {maxLength} characters", "fullName", &error),
            "Name must be at most 50 characters"
        );
    }

    #[test]
    fn test_render_without_placeholders() {
        let error = ValidationError::new("required", "x");
        assert_eq!(render_template("Email is required", "email", &error), "Email is required");
    }

    #[test]
    fn test_render_unterminated_brace() {
        let error = ValidationError::min_length(6, 1);
        assert_eq!(render_template("{minLength} {oops", "f", &error), "6 {oops");
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let messages: MessageSet =
            serde_json::from_str(r#"{"minLength": "Too short", "matchField": "No match"}"#)
                .unwrap();
        assert_eq!(messages.get(Constraint::MinLength), Some("Too short"));
        assert_eq!(messages.get(Constraint::MatchField), Some("No match"));
    }
}
