//! Signature builder for code objects.
//!
//! The `SignatureBuilder` collects parameters in declaration order and
//! validates them against the host grammar when finished. Derived counts
//! and flags are computed exactly once here, so a `CodeObject` never has to
//! be re-scanned at query time.

use super::code_object::{CodeFlags, CodeObject, Param, ParamKind};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Errors raised while building a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// A parameter has an empty name.
    EmptyName { position: usize },

    /// Two parameters share a name.
    DuplicateParam { name: Arc<str> },

    /// A parameter kind appears after a kind that must follow it.
    OutOfOrder {
        name: Arc<str>,
        kind: ParamKind,
        after: ParamKind,
    },

    /// More than one collector of the same kind.
    DuplicateCollector { name: Arc<str>, kind: ParamKind },

    /// A positional parameter without a default follows one with a default.
    NonDefaultAfterDefault { name: Arc<str> },

    /// A variadic collector was given a default.
    VariadicDefault { name: Arc<str> },

    /// The signature has more parameters than a code object can count.
    TooManyParams { count: usize },
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName { position } => {
                write!(f, "parameter {} has an empty name", position)
            }
            Self::DuplicateParam { name } => {
                write!(f, "duplicate argument '{}' in function definition", name)
            }
            Self::OutOfOrder { name, kind, after } => {
                write!(f, "{} parameter '{}' follows {} parameter", kind, name, after)
            }
            Self::DuplicateCollector { name, kind } => {
                write!(f, "second {} collector '{}'", kind, name)
            }
            Self::NonDefaultAfterDefault { name } => {
                write!(f, "parameter '{}' without a default follows parameter with a default", name)
            }
            Self::VariadicDefault { name } => {
                write!(f, "variadic parameter '{}' cannot have a default", name)
            }
            Self::TooManyParams { count } => {
                write!(f, "too many parameters ({})", count)
            }
        }
    }
}

impl std::error::Error for SignatureError {}

/// Result type for signature construction.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Builder for constructing code objects.
///
/// # Example
/// ```ignore
/// let code = SignatureBuilder::new("send")
///     .param("dest")
///     .param_default("timeout")
///     .var_keyword("headers")
///     .finish()?;
/// assert_eq!(code.flexible_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    name: Arc<str>,
    qualname: Arc<str>,
    filename: Arc<str>,
    first_lineno: u32,
    params: SmallVec<[Param; 8]>,
}

impl SignatureBuilder {
    /// Start a signature for the named callable.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Self {
            qualname: name.clone(),
            name,
            filename: Arc::from("<unknown>"),
            first_lineno: 1,
            params: SmallVec::new(),
        }
    }

    /// Set the qualified name.
    pub fn qualname(mut self, qualname: impl Into<Arc<str>>) -> Self {
        self.qualname = qualname.into();
        self
    }

    /// Set the defining filename.
    pub fn filename(mut self, filename: impl Into<Arc<str>>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Set the first source line.
    pub fn first_lineno(mut self, line: u32) -> Self {
        self.first_lineno = line;
        self
    }

    /// Append an arbitrary parameter.
    pub fn push(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Append a mandatory positional-only parameter.
    pub fn positional_only(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::new(name, ParamKind::PositionalOnly))
    }

    /// Append an optional positional-only parameter.
    pub fn positional_only_default(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::with_default(name, ParamKind::PositionalOnly))
    }

    /// Append a mandatory flexible parameter.
    pub fn param(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::new(name, ParamKind::PositionalOrKeyword))
    }

    /// Append an optional flexible parameter.
    pub fn param_default(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::with_default(name, ParamKind::PositionalOrKeyword))
    }

    /// Append the `*args` collector.
    pub fn var_positional(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::new(name, ParamKind::VarPositional))
    }

    /// Append a mandatory keyword-only parameter.
    pub fn keyword_only(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::new(name, ParamKind::KeywordOnly))
    }

    /// Append an optional keyword-only parameter.
    pub fn keyword_only_default(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::with_default(name, ParamKind::KeywordOnly))
    }

    /// Append the `**kwargs` collector.
    pub fn var_keyword(self, name: impl Into<Arc<str>>) -> Self {
        self.push(Param::new(name, ParamKind::VarKeyword))
    }

    /// Validate the parameter list and build the code object.
    pub fn finish(self) -> SignatureResult<CodeObject> {
        if self.params.len() > u16::MAX as usize {
            return Err(SignatureError::TooManyParams {
                count: self.params.len(),
            });
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut last_kind: Option<ParamKind> = None;
        let mut saw_default = false;

        let mut posonly = 0u16;
        let mut flexible = 0u16;
        let mut kwonly = 0u16;
        let mut flags = CodeFlags::NONE;

        for (position, param) in self.params.iter().enumerate() {
            if param.name.is_empty() {
                return Err(SignatureError::EmptyName { position });
            }
            if !seen.insert(&*param.name) {
                return Err(SignatureError::DuplicateParam {
                    name: param.name.clone(),
                });
            }

            if let Some(after) = last_kind {
                if param.kind < after {
                    return Err(SignatureError::OutOfOrder {
                        name: param.name.clone(),
                        kind: param.kind,
                        after,
                    });
                }
                if param.kind == after && param.kind.is_variadic() {
                    return Err(SignatureError::DuplicateCollector {
                        name: param.name.clone(),
                        kind: param.kind,
                    });
                }
            }

            if param.kind.is_variadic() && param.has_default {
                return Err(SignatureError::VariadicDefault {
                    name: param.name.clone(),
                });
            }

            if param.kind.is_positional() {
                if param.has_default {
                    saw_default = true;
                } else if saw_default {
                    return Err(SignatureError::NonDefaultAfterDefault {
                        name: param.name.clone(),
                    });
                }
            }

            match param.kind {
                ParamKind::PositionalOnly => posonly += 1,
                ParamKind::PositionalOrKeyword => flexible += 1,
                ParamKind::VarPositional => flags |= CodeFlags::VARARGS,
                ParamKind::KeywordOnly => kwonly += 1,
                ParamKind::VarKeyword => flags |= CodeFlags::VARKEYWORDS,
            }

            last_kind = Some(param.kind);
        }

        Ok(CodeObject::from_parts(
            self.name,
            self.qualname,
            self.filename,
            self.first_lineno,
            self.params.into_vec().into_boxed_slice(),
            posonly + flexible,
            posonly,
            kwonly,
            flags,
        ))
    }
}
