//! Callable object model and signature introspection for argus.
//!
//! This crate provides:
//! - Callable objects (functions, bound methods, native functions, frames)
//! - Codeobjable resolution with bounded unwrapping of forwarding layers
//! - Argument-count and argument-kind queries used by the wrapper generator

#![deny(unsafe_code)]

pub mod introspect;
pub mod object;

// Re-export commonly used items
pub use introspect::{IntrospectError, IntrospectResult, Unresolvable};
pub use object::{BoundMethodObject, Callable, Codeobjable, Frame, FunctionObject, NativeFunction};

// Re-export the signature model for convenience
pub use argus_code::{CodeObject, ParamKind, SignatureBuilder};
