//! # fieldrule-validator
//!
//! Declarative field validation for form input.
//!
//! Each field name maps to a [`RuleSet`](rules::RuleSet) of constraints and a
//! [`MessageSet`](rules::MessageSet) of message templates, stored in a
//! [`RuleRegistry`](registry::RuleRegistry). A
//! [`FormValidator`](evaluator::FormValidator) runs a field's constraints in a
//! fixed order and reports the first failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldrule_validator::prelude::*;
//!
//! let validator = FormValidator::default();
//! let form: FormValues = [
//!     ("password".to_owned(), "Secret1!".to_owned()),
//!     ("confirmPassword".to_owned(), "Secret2!".to_owned()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let errors = validator.validate_form(&form, None);
//! assert_eq!(errors["confirmPassword"], "Passwords do not match");
//! assert!(!errors.contains_key("password"));
//! ```
//!
//! ## Registering Rules
//!
//! Rules can be built in code or loaded from a JSON table:
//!
//! ```rust
//! use fieldrule_validator::prelude::*;
//!
//! let registry = RuleRegistry::empty();
//! registry.load_json(r#"{
//!     "username": {
//!         "rules": { "required": true, "minLength": 3, "noSpaces": true },
//!         "messages": { "minLength": "At least {minLength} characters" }
//!     }
//! }"#)?;
//!
//! let validator = FormValidator::new(std::sync::Arc::new(registry));
//! assert_eq!(
//!     validator.validate_field("username", "ab", &FormValues::new()),
//!     "At least 3 characters"
//! );
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Checkers
//!
//! Every standard constraint is a [`Validate`](foundation::Validate)
//! implementation in [`validators`], built with the [`validator!`] macro.

// ValidationError is returned by value from every checker; boxing it would
// add an allocation to each failed check.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod validators;
