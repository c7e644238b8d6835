//! Signature introspection.
//!
//! Pure queries over the signature of a codeobjable input. Every query
//! resolves its input through [`resolve_code`] (unwrapping forwarding
//! layers) and fails with [`IntrospectError::NotPureCallable`] when no code
//! object can be reached.
//!
//! | Query | Answers |
//! |-------|---------|
//! | [`is_argless`] | no parameters and no collectors |
//! | [`has_variadic_positional`] | declares `*args` |
//! | [`has_variadic_keyword`] | declares `**kwargs` |
//! | [`is_variadic`] | declares either collector |
//! | [`count_flexible_args`] | parameters passable positionally or by name |
//! | [`validate_flexible_arg_count`] | flexible count equals an expected value |
//! | [`has_arg_named`] | some parameter bears a name (linear scan) |

mod args;
mod error;
mod iter;
mod resolve;

pub use args::{
    count_flexible_args, count_positional_args, has_arg_named, has_variadic_keyword,
    has_variadic_positional, is_argless, is_variadic, validate_argless,
    validate_flexible_arg_count,
};
pub use error::{IntrospectError, IntrospectResult, Unresolvable};
pub use iter::{ArgIter, ArgMeta, iter_args};
pub use resolve::{MAX_UNWRAP_DEPTH, resolve_code, unwrap_callable};
