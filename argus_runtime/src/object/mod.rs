//! Callable object model.
//!
//! - [`FunctionObject`] / [`BoundMethodObject`] - pure-interpretable callables
//! - [`NativeFunction`] - callables with no inspectable signature
//! - [`Frame`] - execution frames
//! - [`Callable`] / [`Codeobjable`] - handles and introspection inputs

pub mod callable;
pub mod frame;
pub mod function;

pub use callable::{Callable, Codeobjable};
pub use frame::Frame;
pub use function::{BoundMethodObject, FunctionObject, NativeFunction};
