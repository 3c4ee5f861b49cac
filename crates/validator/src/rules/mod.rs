//! Rule and message data model
//!
//! - [`RuleSet`] — constraints for one field
//! - [`MessageSet`] — message templates for one field
//! - [`Constraint`] — the constraint keys, in pipeline order
//! - [`CustomRule`] — a predicate plus message for the extension path
//! - [`RuleTable`] — JSON form of rule and message sets

use std::collections::HashMap;

pub mod constraint;
pub mod defaults;
pub mod message;
pub mod rule_set;
pub mod table;

pub use constraint::{Constraint, UnknownConstraint};
pub use defaults::default_table;
pub use message::{MessageSet, render_template};
pub use rule_set::{Predicate, RuleSet, Transform};
pub use table::{FieldSpec, RuleSpec, RuleTable};

/// Current values of every field in a submission.
pub type FormValues = HashMap<String, String>;

/// A predicate and the message reported when it returns `false`.
///
/// # Examples
///
/// ```rust
/// use fieldrule_validator::rules::{CustomRule, FormValues};
///
/// let not_admin = CustomRule::new(|v, _| v != "admin", "That name is reserved");
/// assert!(not_admin.passes("alice", &FormValues::new()));
/// assert!(!not_admin.passes("admin", &FormValues::new()));
/// ```
#[derive(Debug, Clone)]
pub struct CustomRule {
    pub predicate: Predicate,
    pub message: String,
}

impl CustomRule {
    /// Creates a custom rule from a closure.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Predicate::new(predicate),
            message: message.into(),
        }
    }

    /// Creates a custom rule from an existing predicate.
    pub fn from_predicate(predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    /// Returns true if the value is acceptable.
    pub fn passes(&self, value: &str, form: &FormValues) -> bool {
        self.predicate.test(value, form)
    }
}
