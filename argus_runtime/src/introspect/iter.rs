//! Parameter iteration.
//!
//! [`ArgIter`] walks a resolved code object's parameters in declaration
//! order. It is lazy and finite, and [`ArgIter::restart`] rewinds it without
//! resolving the callable again.

use super::error::IntrospectResult;
use super::resolve::resolve_code;
use crate::object::Codeobjable;
use argus_code::{CodeObject, ParamKind};
use std::iter::FusedIterator;
use std::sync::Arc;

/// Metadata for one parameter yielded by [`ArgIter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgMeta {
    /// Parameter name.
    pub name: Arc<str>,
    /// Calling convention.
    pub kind: ParamKind,
    /// Zero-based declaration index.
    pub index: usize,
    /// Whether a call must supply this parameter.
    pub is_mandatory: bool,
}

/// Declaration-order iterator over a callable's parameters.
#[derive(Debug, Clone)]
pub struct ArgIter {
    code: Arc<CodeObject>,
    index: usize,
}

impl ArgIter {
    /// Iterate the parameters of an already resolved code object.
    pub fn new(code: Arc<CodeObject>) -> Self {
        Self { code, index: 0 }
    }

    /// Rewind to the first parameter.
    #[inline]
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Code object being iterated.
    #[inline]
    pub fn code(&self) -> &Arc<CodeObject> {
        &self.code
    }
}

impl Iterator for ArgIter {
    type Item = ArgMeta;

    fn next(&mut self) -> Option<ArgMeta> {
        let param = self.code.params().get(self.index)?;
        let meta = ArgMeta {
            name: param.name.clone(),
            kind: param.kind,
            index: self.index,
            is_mandatory: param.is_mandatory(),
        };
        self.index += 1;
        Some(meta)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code.params().len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArgIter {}

impl FusedIterator for ArgIter {}

/// Iterate the parameters of the callable `func` unwraps to.
pub fn iter_args<'a>(func: impl Into<Codeobjable<'a>>) -> IntrospectResult<ArgIter> {
    Ok(ArgIter::new(resolve_code(func, true)?))
}
