//! Argument testers and validators.
//!
//! Each query resolves its input with unwrapping enabled, then answers from
//! the counts and flags stored on the code object. Resolution failures are
//! returned unchanged.
//!
//! Flexible parameters are those passable either positionally or by name.
//! Positional-only parameters, keyword-only parameters and variadic
//! collectors are never flexible.

use super::error::{IntrospectError, IntrospectResult};
use super::iter::iter_args;
use super::resolve::resolve_code;
use crate::object::Codeobjable;

// =============================================================================
// Validators
// =============================================================================

/// Fail unless `func` accepts exactly `expected` flexible parameters.
pub fn validate_flexible_arg_count<'a>(
    func: impl Into<Codeobjable<'a>>,
    expected: usize,
) -> IntrospectResult<()> {
    let func = func.into();
    let actual = count_flexible_args(func)?;

    if actual != expected {
        return Err(IntrospectError::FlexibleArgCount {
            repr: func.to_string(),
            actual,
            expected,
        });
    }
    Ok(())
}

/// Fail unless `func` accepts no arguments at all.
pub fn validate_argless<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<()> {
    let func = func.into();
    if !is_argless(func)? {
        return Err(IntrospectError::NotArgless {
            repr: func.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Counters
// =============================================================================

/// Number of parameters passable either positionally or by name.
///
/// Positional-only parameters are excluded, unlike the host runtime's
/// `co_argcount`; [`count_positional_args`] includes them.
pub fn count_flexible_args<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<usize> {
    let code = resolve_code(func, true)?;
    Ok(usize::from(code.flexible_count()))
}

/// Number of parameters passable positionally, positional-only included.
pub fn count_positional_args<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<usize> {
    let code = resolve_code(func, true)?;
    Ok(usize::from(code.arg_count()))
}

// =============================================================================
// Testers
// =============================================================================

/// Check if calling `func` with no arguments can never fail on arity.
///
/// True only when there are no non-variadic parameters of any kind and no
/// variadic collectors.
pub fn is_argless<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<bool> {
    let code = resolve_code(func, true)?;
    Ok(code.total_params() == 0 && !code.flags().is_variadic())
}

/// Check if `func` declares a variadic positional collector (`*args`).
pub fn has_variadic_positional<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<bool> {
    Ok(resolve_code(func, true)?.has_varargs())
}

/// Check if `func` declares a variadic keyword collector (`**kwargs`).
pub fn has_variadic_keyword<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<bool> {
    Ok(resolve_code(func, true)?.has_varkw())
}

/// Check if `func` declares either variadic collector.
pub fn is_variadic<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<bool> {
    Ok(resolve_code(func, true)?.flags().is_variadic())
}

/// Check if any parameter of `func`, of any kind, is named `name`.
///
/// This is a linear scan over the full parameter list. Callers that ask
/// repeatedly about the same callable should keep the answer.
pub fn has_arg_named<'a>(func: impl Into<Codeobjable<'a>>, name: &str) -> IntrospectResult<bool> {
    Ok(iter_args(func)?.any(|arg| &*arg.name == name))
}
