//! Code-object resolution.
//!
//! Every introspection query starts here: the codeobjable input is reduced
//! to the `CodeObject` describing its signature, following forwarding layers
//! when asked to.

use super::error::{IntrospectError, IntrospectResult, Unresolvable};
use crate::object::{Callable, Codeobjable};
use argus_code::CodeObject;
use std::sync::Arc;
use tracing::trace;

/// Maximum number of forwarding layers followed before giving up.
pub const MAX_UNWRAP_DEPTH: usize = 64;

/// Follow `wrapped` back-references to the innermost callable.
///
/// Fails if the innermost callable is still not reached after
/// [`MAX_UNWRAP_DEPTH`] layers.
pub fn unwrap_callable(callable: &Callable) -> IntrospectResult<&Callable> {
    let mut current = callable;

    for depth in 0..MAX_UNWRAP_DEPTH {
        match current.wrapped() {
            Some(inner) => {
                trace!(
                    depth,
                    from = %current,
                    to = %inner,
                    "introspect: unwrapped forwarding layer"
                );
                current = inner;
            }
            None => return Ok(current),
        }
    }

    if current.wrapped().is_none() {
        return Ok(current);
    }

    Err(IntrospectError::NotPureCallable {
        repr: callable.to_string(),
        reason: Unresolvable::UnwrapDepthExceeded {
            depth: MAX_UNWRAP_DEPTH,
        },
    })
}

/// Resolve a codeobjable input to its code object.
///
/// With `unwrap` set, callables are first unwrapped to the callable they
/// ultimately forward to. Frames and raw code objects resolve directly.
pub fn resolve_code<'a>(
    func: impl Into<Codeobjable<'a>>,
    unwrap: bool,
) -> IntrospectResult<Arc<CodeObject>> {
    let func = func.into();

    let code = match func {
        Codeobjable::Code(code) => Some(code),
        Codeobjable::Frame(frame) => Some(&frame.code),
        Codeobjable::Callable(callable) => {
            let target = if unwrap {
                unwrap_callable(callable)?
            } else {
                callable
            };
            target.code()
        }
        Codeobjable::Uncallable(repr) => {
            return Err(IntrospectError::NotPureCallable {
                repr: repr.to_string(),
                reason: Unresolvable::NotCallable,
            });
        }
    };

    code.map(Arc::clone)
        .ok_or_else(|| IntrospectError::NotPureCallable {
            repr: func.to_string(),
            reason: Unresolvable::Native,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Frame, FunctionObject, NativeFunction};
    use argus_code::SignatureBuilder;

    fn inner_code() -> Arc<CodeObject> {
        Arc::new(
            SignatureBuilder::new("inner")
                .param("a")
                .param("b")
                .finish()
                .unwrap(),
        )
    }

    fn forwarding_code() -> Arc<CodeObject> {
        Arc::new(
            SignatureBuilder::new("wrapper")
                .var_positional("args")
                .var_keyword("kwargs")
                .finish()
                .unwrap(),
        )
    }

    fn wrap(inner: Callable, layers: usize) -> Callable {
        (0..layers).fold(inner, |acc, _| {
            Callable::from(FunctionObject::wrapping(forwarding_code(), acc))
        })
    }

    #[test]
    fn test_resolve_raw_code() {
        let code = inner_code();
        let resolved = resolve_code(&code, true).unwrap();
        assert!(Arc::ptr_eq(&resolved, &code));
    }

    #[test]
    fn test_resolve_frame() {
        let code = inner_code();
        let frame = Frame::new(Arc::clone(&code));
        let resolved = resolve_code(&frame, true).unwrap();
        assert!(Arc::ptr_eq(&resolved, &code));
    }

    #[test]
    fn test_resolve_unwraps_layers() {
        let code = inner_code();
        let inner = Callable::from(FunctionObject::new(Arc::clone(&code)));
        let wrapped = wrap(inner, 3);

        let resolved = resolve_code(&wrapped, true).unwrap();
        assert!(Arc::ptr_eq(&resolved, &code));

        let outer = resolve_code(&wrapped, false).unwrap();
        assert_eq!(&*outer.name, "wrapper");
    }

    #[test]
    fn test_unwrap_at_depth_limit() {
        let inner = Callable::from(FunctionObject::new(inner_code()));
        let wrapped = wrap(inner, MAX_UNWRAP_DEPTH);
        let resolved = unwrap_callable(&wrapped).unwrap();
        assert_eq!(&*resolved.name(), "inner");
    }

    #[test]
    fn test_unwrap_past_depth_limit_fails() {
        let inner = Callable::from(FunctionObject::new(inner_code()));
        let wrapped = wrap(inner, MAX_UNWRAP_DEPTH + 1);
        let err = resolve_code(&wrapped, true).unwrap_err();
        assert!(matches!(
            err,
            IntrospectError::NotPureCallable {
                reason: Unresolvable::UnwrapDepthExceeded { depth: MAX_UNWRAP_DEPTH },
                ..
            }
        ));
    }

    #[test]
    fn test_native_fails() {
        let native = Callable::from(NativeFunction::new("len"));
        let err = resolve_code(&native, true).unwrap_err();
        assert_eq!(
            err,
            IntrospectError::NotPureCallable {
                repr: "<built-in function len>".to_string(),
                reason: Unresolvable::Native,
            }
        );
    }

    #[test]
    fn test_wrapped_native_fails() {
        let native = Callable::from(NativeFunction::new("len"));
        let wrapped = wrap(native, 1);
        let err = resolve_code(&wrapped, true).unwrap_err();
        assert!(matches!(
            err,
            IntrospectError::NotPureCallable {
                reason: Unresolvable::Native,
                ..
            }
        ));
        // The forwarding layer itself is still inspectable.
        assert!(resolve_code(&wrapped, false).is_ok());
    }

    #[test]
    fn test_uncallable_fails() {
        let err = resolve_code(Codeobjable::Uncallable("'text'"), true).unwrap_err();
        assert_eq!(
            err,
            IntrospectError::NotPureCallable {
                repr: "'text'".to_string(),
                reason: Unresolvable::NotCallable,
            }
        );
    }
}
