//! Dynamically typed option values.
//!
//! Decoration call sites hand options over untyped. `OptionValue` carries
//! such a value until configuration construction checks its type.

use crate::strategy::CheckStrategy;
use std::fmt;
use std::sync::Arc;

/// Untyped decoration option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// No value.
    None,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// String.
    Str(Arc<str>),
    /// Checking strategy member.
    Strategy(CheckStrategy),
}

impl OptionValue {
    /// Name of the value's type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            OptionValue::None => "NoneType",
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Str(_) => "str",
            OptionValue::Strategy(_) => "CheckStrategy",
        }
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_strategy(&self) -> Option<CheckStrategy> {
        match self {
            OptionValue::Strategy(s) => Some(*s),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.into())
    }
}

impl From<CheckStrategy> for OptionValue {
    fn from(value: CheckStrategy) -> Self {
        OptionValue::Strategy(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::None => f.write_str("None"),
            OptionValue::Bool(true) => f.write_str("True"),
            OptionValue::Bool(false) => f.write_str("False"),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Str(s) => write!(f, "'{}'", s),
            OptionValue::Strategy(s) => write!(f, "CheckStrategy.{}", s),
        }
    }
}
