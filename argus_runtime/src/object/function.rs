//! Function, bound method and native callable objects.
//!
//! Only [`FunctionObject`] (and bound methods over one) carry a code object.
//! A [`NativeFunction`] is callable but exposes no signature, so every
//! introspection query on it fails.

use super::callable::Callable;
use argus_code::CodeObject;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Function Object
// =============================================================================

/// Pure-interpretable function object.
///
/// A function produced by a forwarding decorator keeps a back-reference to
/// the callable it forwards to in `wrapped`. Introspection follows that chain
/// so the signature of the innermost callable is reported.
#[derive(Debug, Clone)]
pub struct FunctionObject {
    /// Signature descriptor.
    pub code: Arc<CodeObject>,
    /// Function name.
    pub name: Arc<str>,
    /// Qualified name.
    pub qualname: Arc<str>,
    /// Callable this function forwards to, if it is a wrapper.
    wrapped: Option<Callable>,
}

impl FunctionObject {
    /// Create a function named after its code object.
    pub fn new(code: Arc<CodeObject>) -> Self {
        Self {
            name: code.name.clone(),
            qualname: code.qualname.clone(),
            code,
            wrapped: None,
        }
    }

    /// Create a function with an explicit name.
    ///
    /// The qualified name still comes from the code object.
    pub fn with_name(code: Arc<CodeObject>, name: impl Into<Arc<str>>) -> Self {
        Self {
            qualname: code.qualname.clone(),
            code,
            name: name.into(),
            wrapped: None,
        }
    }

    /// Create a forwarding wrapper around `wrapped`.
    ///
    /// The wrapper takes both the name and the qualified name of the callable
    /// it wraps, as a `functools.wraps`-style decorator would. Its own code
    /// object stays reachable through `code`.
    pub fn wrapping(code: Arc<CodeObject>, wrapped: Callable) -> Self {
        Self {
            name: wrapped.name(),
            qualname: wrapped.qualname(),
            code,
            wrapped: Some(wrapped),
        }
    }

    /// The callable this function forwards to.
    #[inline]
    pub fn wrapped(&self) -> Option<&Callable> {
        self.wrapped.as_ref()
    }

    /// Qualified name, as shown in the repr.
    #[inline]
    pub fn qualname(&self) -> &str {
        &self.qualname
    }
}

impl fmt::Display for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.qualname())
    }
}

// =============================================================================
// Bound Method Object
// =============================================================================

/// Bound method - a function bound to an instance.
///
/// The receiver is kept only as its display form; the checker never calls
/// through it.
#[derive(Debug, Clone)]
pub struct BoundMethodObject {
    /// The underlying function.
    pub func: Arc<FunctionObject>,
    /// Display form of the bound instance (self).
    pub receiver: Arc<str>,
}

impl BoundMethodObject {
    /// Create a new bound method.
    pub fn new(func: Arc<FunctionObject>, receiver: impl Into<Arc<str>>) -> Self {
        Self {
            func,
            receiver: receiver.into(),
        }
    }
}

impl fmt::Display for BoundMethodObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<bound method {} of {}>",
            self.func.qualname(),
            self.receiver
        )
    }
}

// =============================================================================
// Native Function
// =============================================================================

/// Natively compiled callable with no inspectable signature.
#[derive(Debug, Clone)]
pub struct NativeFunction {
    /// Function name.
    pub name: Arc<str>,
}

impl NativeFunction {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<built-in function {}>", self.name)
    }
}
