//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldrule_validator::prelude::*;` import that brings
//! in the registry, the evaluator, the rule data model and every checker.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// RULES, REGISTRY, EVALUATION
// ============================================================================

pub use crate::config::{UnknownFieldPolicy, ValidatorConfig};
pub use crate::error::RuleError;
pub use crate::evaluator::{FieldState, FormValidator};
pub use crate::registry::RuleRegistry;
pub use crate::rules::{
    Constraint, CustomRule, FormValues, MessageSet, Predicate, RuleSet, RuleTable, Transform,
};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
