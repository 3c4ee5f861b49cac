//! Macros for creating checkers with minimal boilerplate.
//!
//! - [`validator!`] — struct + `Validate` impl + constructor + factory fn
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldrule_validator::validator;
//! use fieldrule_validator::foundation::ValidationError;
//!
//! // Unit checker (no fields)
//! validator! {
//!     pub NoTabs for str;
//!     rule(input) { !input.contains('\t') }
//!     error(input) { ValidationError::new("noTabs", "Tabs are not allowed") }
//!     fn no_tabs();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete checker: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`
/// on struct checkers; unit checkers already derive `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// # Variants
///
/// **Unit checker** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub NoSpaces for str;
///     rule(input) { !input.contains(' ') }
///     error(input) { ValidationError::new("noSpaces", "spaces") }
///     fn no_spaces();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.chars().count() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Matches { pattern: Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::new("pattern", "Invalid format") }
///     new(pattern: Regex) { Self { pattern } }
///     fn matches(pattern: Regex);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit checker (no fields) + factory fn ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit checker (no fields), no factory ─────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        TestNoTabs for str;
        rule(input) { !input.contains('\t') }
        error(input) { ValidationError::new("noTabs", "tabs") }
        fn test_no_tabs();
    }

    crate::validator! {
        #[derive(Copy, PartialEq, Eq)]
        TestMinLen { min: usize } for str;
        rule(self, input) { input.len() >= self.min }
        error(self, input) { ValidationError::min_length(self.min, input.len()) }
        fn test_min_len(min: usize);
    }

    crate::validator! {
        TestPrefix { prefix: String } for str;
        rule(self, input) { input.starts_with(self.prefix.as_str()) }
        error(self, input) {
            ValidationError::new("prefix", format!("must start with {}", self.prefix))
        }
        new(prefix: &str) { Self { prefix: prefix.to_owned() } }
        fn test_prefix(prefix: &str);
    }

    #[test]
    fn unit_checker() {
        let v = test_no_tabs();
        assert!(v.validate("a b").is_ok());
        assert_eq!(v.validate("a\tb").unwrap_err().code, "noTabs");
    }

    #[test]
    fn struct_checker_auto_new() {
        let v = test_min_len(3);
        assert_eq!(v, TestMinLen::new(3));
        assert!(v.validate("abc").is_ok());
        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.param("minLength"), Some("3"));
    }

    #[test]
    fn struct_checker_custom_new() {
        let v = test_prefix("+91");
        assert!(v.validate("+919876543210").is_ok());
        assert!(v.validate("9876543210").is_err());
    }
}
