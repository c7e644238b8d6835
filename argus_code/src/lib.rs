//! Static signature descriptors for the argus runtime checker.
//!
//! This crate provides:
//! - [`CodeObject`] - immutable signature descriptor of a pure-interpretable callable
//! - [`Param`] / [`ParamKind`] - parameter descriptors in declaration order
//! - [`CodeFlags`] - calling-convention flags derived from the parameter list
//! - [`SignatureBuilder`] - validated, declaration-order construction of code objects

mod builder;
mod code_object;

pub use builder::{SignatureBuilder, SignatureError, SignatureResult};
pub use code_object::{CodeFlags, CodeObject, Param, ParamKind};
