//! Introspection errors.

use std::fmt;

/// Why an input could not be resolved to a code object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolvable {
    /// The input is not callable at all.
    NotCallable,
    /// The callable is natively compiled and exposes no code object.
    Native,
    /// The chain of forwarding layers is deeper than the unwrap limit.
    UnwrapDepthExceeded { depth: usize },
}

/// Errors raised by signature introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectError {
    /// The input is not a pure-interpretable callable.
    ///
    /// Raised by code-object resolution and passed through unchanged by
    /// every query built on it.
    NotPureCallable { repr: String, reason: Unresolvable },

    /// The callable accepts a different number of flexible parameters.
    FlexibleArgCount {
        repr: String,
        actual: usize,
        expected: usize,
    },

    /// The callable accepts one or more arguments.
    NotArgless { repr: String },
}

impl fmt::Display for IntrospectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPureCallable { repr, reason } => match reason {
                Unresolvable::NotCallable => write!(f, "{} not callable", repr),
                Unresolvable::Native => {
                    write!(f, "callable {} not pure-interpretable (no code object)", repr)
                }
                Unresolvable::UnwrapDepthExceeded { depth } => write!(
                    f,
                    "callable {} not pure-interpretable (more than {} forwarding layers)",
                    repr, depth
                ),
            },
            Self::FlexibleArgCount {
                repr,
                actual,
                expected,
            } => write!(
                f,
                "Callable {} flexible argument count {} != {}.",
                repr, actual, expected
            ),
            Self::NotArgless { repr } => write!(
                f,
                "Callable {} not argument-less (accepts one or more arguments).",
                repr
            ),
        }
    }
}

impl std::error::Error for IntrospectError {}

/// Result type for introspection queries.
pub type IntrospectResult<T> = Result<T, IntrospectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexible_count_message() {
        let err = IntrospectError::FlexibleArgCount {
            repr: "<function f>".to_string(),
            actual: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "Callable <function f> flexible argument count 1 != 2."
        );
    }

    #[test]
    fn test_not_pure_messages() {
        let not_callable = IntrospectError::NotPureCallable {
            repr: "42".to_string(),
            reason: Unresolvable::NotCallable,
        };
        assert_eq!(not_callable.to_string(), "42 not callable");

        let native = IntrospectError::NotPureCallable {
            repr: "<built-in function len>".to_string(),
            reason: Unresolvable::Native,
        };
        assert!(native.to_string().contains("not pure-interpretable"));

        let deep = IntrospectError::NotPureCallable {
            repr: "<function w>".to_string(),
            reason: Unresolvable::UnwrapDepthExceeded { depth: 64 },
        };
        assert!(deep.to_string().contains("more than 64 forwarding layers"));
    }
}
