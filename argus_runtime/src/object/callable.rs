//! Callable handles and codeobjable inputs.
//!
//! [`Callable`] is the shared handle the checker holds on anything that can
//! be decorated. [`Codeobjable`] is the borrowed input every introspection
//! query accepts: a callable, an execution frame, a raw code object, or any
//! other object (which is never resolvable).

use super::frame::Frame;
use super::function::{BoundMethodObject, FunctionObject, NativeFunction};
use argus_code::CodeObject;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Callable
// =============================================================================

/// Shared handle to a callable object.
#[derive(Debug, Clone)]
pub enum Callable {
    /// Pure-interpretable function.
    Function(Arc<FunctionObject>),
    /// Function bound to a receiver.
    BoundMethod(Arc<BoundMethodObject>),
    /// Natively compiled callable.
    Native(Arc<NativeFunction>),
}

impl Callable {
    /// Create a plain function callable from a code object.
    pub fn from_code(code: CodeObject) -> Self {
        Callable::Function(Arc::new(FunctionObject::new(Arc::new(code))))
    }

    /// Callable name.
    pub fn name(&self) -> Arc<str> {
        match self {
            Callable::Function(f) => f.name.clone(),
            Callable::BoundMethod(m) => m.func.name.clone(),
            Callable::Native(n) => n.name.clone(),
        }
    }

    /// Qualified callable name.
    ///
    /// Native callables have no enclosing scope, so this is their name.
    pub fn qualname(&self) -> Arc<str> {
        match self {
            Callable::Function(f) => f.qualname.clone(),
            Callable::BoundMethod(m) => m.func.qualname.clone(),
            Callable::Native(n) => n.name.clone(),
        }
    }

    /// The callable this one forwards to, if it is a wrapper.
    ///
    /// Bound methods forward the lookup to their function.
    #[inline]
    pub fn wrapped(&self) -> Option<&Callable> {
        match self {
            Callable::Function(f) => f.wrapped(),
            Callable::BoundMethod(m) => m.func.wrapped(),
            Callable::Native(_) => None,
        }
    }

    /// Code object of this callable itself, without unwrapping.
    ///
    /// A bound method reports its function's code, receiver included.
    #[inline]
    pub fn code(&self) -> Option<&Arc<CodeObject>> {
        match self {
            Callable::Function(f) => Some(&f.code),
            Callable::BoundMethod(m) => Some(&m.func.code),
            Callable::Native(_) => None,
        }
    }

    /// Check if this callable is natively compiled.
    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self, Callable::Native(_))
    }
}

impl From<FunctionObject> for Callable {
    fn from(func: FunctionObject) -> Self {
        Callable::Function(Arc::new(func))
    }
}

impl From<Arc<FunctionObject>> for Callable {
    fn from(func: Arc<FunctionObject>) -> Self {
        Callable::Function(func)
    }
}

impl From<BoundMethodObject> for Callable {
    fn from(method: BoundMethodObject) -> Self {
        Callable::BoundMethod(Arc::new(method))
    }
}

impl From<NativeFunction> for Callable {
    fn from(native: NativeFunction) -> Self {
        Callable::Native(Arc::new(native))
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Function(func) => write!(f, "{}", func),
            Callable::BoundMethod(method) => write!(f, "{}", method),
            Callable::Native(native) => write!(f, "{}", native),
        }
    }
}

// =============================================================================
// Codeobjable
// =============================================================================

/// Input accepted by every introspection query.
#[derive(Debug, Clone, Copy)]
pub enum Codeobjable<'a> {
    /// Any callable object.
    Callable(&'a Callable),
    /// Execution frame of a pure-interpretable callable.
    Frame(&'a Frame),
    /// Raw code object.
    Code(&'a Arc<CodeObject>),
    /// Any non-callable object, carried by its display form.
    Uncallable(&'a str),
}

impl<'a> From<&'a Callable> for Codeobjable<'a> {
    fn from(callable: &'a Callable) -> Self {
        Codeobjable::Callable(callable)
    }
}

impl<'a> From<&'a Frame> for Codeobjable<'a> {
    fn from(frame: &'a Frame) -> Self {
        Codeobjable::Frame(frame)
    }
}

impl<'a> From<&'a Arc<CodeObject>> for Codeobjable<'a> {
    fn from(code: &'a Arc<CodeObject>) -> Self {
        Codeobjable::Code(code)
    }
}

impl fmt::Display for Codeobjable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codeobjable::Callable(callable) => write!(f, "{}", callable),
            Codeobjable::Frame(frame) => write!(f, "{}", frame),
            Codeobjable::Code(code) => write!(
                f,
                "<code object {}, file \"{}\", line {}>",
                code.qualname, code.filename, code.first_lineno
            ),
            Codeobjable::Uncallable(repr) => f.write_str(repr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_code::SignatureBuilder;

    fn code(name: &str) -> CodeObject {
        SignatureBuilder::new(name)
            .filename("sample.py")
            .first_lineno(3)
            .param("a")
            .finish()
            .unwrap()
    }

    #[test]
    fn test_function_callable() {
        let callable = Callable::from_code(code("f"));
        assert_eq!(&*callable.name(), "f");
        assert!(callable.code().is_some());
        assert!(callable.wrapped().is_none());
        assert!(!callable.is_native());
    }

    #[test]
    fn test_bound_method_forwards_wrapped() {
        let inner = Callable::from_code(code("inner"));
        let wrapper = Arc::new(FunctionObject::wrapping(
            Arc::new(code("wrapper")),
            inner,
        ));
        let method = Callable::from(BoundMethodObject::new(wrapper, "<obj>"));
        assert_eq!(method.wrapped().map(|c| c.name()).as_deref(), Some("inner"));
    }

    #[test]
    fn test_native_has_no_code() {
        let native = Callable::from(NativeFunction::new("len"));
        assert!(native.is_native());
        assert!(native.code().is_none());
        assert!(native.wrapped().is_none());
    }

    #[test]
    fn test_codeobjable_display() {
        let code = Arc::new(code("f"));
        assert_eq!(
            Codeobjable::from(&code).to_string(),
            "<code object f, file \"sample.py\", line 3>"
        );
        assert_eq!(Codeobjable::Uncallable("42").to_string(), "42");

        let callable = Callable::from_code((*code).clone());
        assert_eq!(Codeobjable::from(&callable).to_string(), "<function f>");
    }
}
