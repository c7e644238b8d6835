//! Code object representation for checkable callables.
//!
//! A `CodeObject` is the static signature descriptor of a pure-interpretable
//! callable. It carries the callable's names, its source location and the
//! ordered parameter list. Argument counts and flags are derived once by
//! [`SignatureBuilder`](crate::SignatureBuilder), so every later query is a
//! field read rather than a scan.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// Parameters
// =============================================================================

/// How a parameter may be supplied at a call site.
///
/// Variants are declared in the only order the host grammar allows them to
/// appear in a signature, so `Ord` doubles as the ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKind {
    /// Positional only (declared before `/`).
    PositionalOnly,
    /// Positional or keyword.
    PositionalOrKeyword,
    /// Variadic positional collector (`*args`).
    VarPositional,
    /// Keyword only (declared after `*` or `*args`).
    KeywordOnly,
    /// Variadic keyword collector (`**kwargs`).
    VarKeyword,
}

impl ParamKind {
    /// Check if the parameter may be passed either positionally or by name.
    #[inline]
    pub const fn is_flexible(self) -> bool {
        matches!(self, ParamKind::PositionalOrKeyword)
    }

    /// Check if the parameter may be passed positionally.
    #[inline]
    pub const fn is_positional(self) -> bool {
        matches!(
            self,
            ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword
        )
    }

    /// Check if the parameter is a variadic collector.
    #[inline]
    pub const fn is_variadic(self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }

    /// Human-readable kind label.
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamKind::PositionalOnly => "positional-only",
            ParamKind::PositionalOrKeyword => "positional-or-keyword",
            ParamKind::VarPositional => "variadic positional",
            ParamKind::KeywordOnly => "keyword-only",
            ParamKind::VarKeyword => "variadic keyword",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parameter descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: Arc<str>,
    /// Calling convention.
    pub kind: ParamKind,
    /// Whether a default value is declared.
    pub has_default: bool,
}

impl Param {
    /// Create a parameter without a default.
    pub fn new(name: impl Into<Arc<str>>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            has_default: false,
        }
    }

    /// Create a parameter with a declared default.
    pub fn with_default(name: impl Into<Arc<str>>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            has_default: true,
        }
    }

    /// Check if a call must supply this parameter.
    #[inline]
    pub fn is_mandatory(&self) -> bool {
        !self.has_default && !self.kind.is_variadic()
    }
}

// =============================================================================
// Code Flags
// =============================================================================

/// Calling-convention flags derived from the parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodeFlags(u32);

impl CodeFlags {
    /// No flags.
    pub const NONE: CodeFlags = CodeFlags(0);
    /// Callable declares `*args`.
    pub const VARARGS: CodeFlags = CodeFlags(1 << 0);
    /// Callable declares `**kwargs`.
    pub const VARKEYWORDS: CodeFlags = CodeFlags(1 << 1);

    /// Check if a flag is set.
    #[inline]
    pub const fn contains(self, other: CodeFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Combine flags.
    #[inline]
    pub const fn union(self, other: CodeFlags) -> CodeFlags {
        CodeFlags(self.0 | other.0)
    }

    /// Check if either collector is declared.
    #[inline]
    pub const fn is_variadic(self) -> bool {
        self.0 != 0
    }
}

impl std::ops::BitOr for CodeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for CodeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// =============================================================================
// Code Object
// =============================================================================

/// Static signature descriptor of a pure-interpretable callable.
///
/// Code objects are immutable once built and are shared through `Arc`
/// between functions, frames and the wrappers generated around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeObject {
    /// Callable name.
    pub name: Arc<str>,

    /// Qualified name (includes enclosing class/function names).
    pub qualname: Arc<str>,

    /// Filename where this callable was defined.
    pub filename: Arc<str>,

    /// First line number in source.
    pub first_lineno: u32,

    /// Parameters in declaration order.
    params: Box<[Param]>,

    /// Positional parameters, positional-only included.
    arg_count: u16,

    /// Positional-only parameters.
    posonlyarg_count: u16,

    /// Keyword-only parameters, `**kwargs` excluded.
    kwonlyarg_count: u16,

    flags: CodeFlags,
}

impl CodeObject {
    /// Create a code object for a callable accepting no parameters.
    pub fn new(name: impl Into<Arc<str>>, filename: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        CodeObject {
            qualname: name.clone(),
            name,
            filename: filename.into(),
            first_lineno: 1,
            params: Box::new([]),
            arg_count: 0,
            posonlyarg_count: 0,
            kwonlyarg_count: 0,
            flags: CodeFlags::NONE,
        }
    }

    /// Assemble a code object from an already validated parameter list.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: Arc<str>,
        qualname: Arc<str>,
        filename: Arc<str>,
        first_lineno: u32,
        params: Box<[Param]>,
        arg_count: u16,
        posonlyarg_count: u16,
        kwonlyarg_count: u16,
        flags: CodeFlags,
    ) -> Self {
        CodeObject {
            name,
            qualname,
            filename,
            first_lineno,
            params,
            arg_count,
            posonlyarg_count,
            kwonlyarg_count,
            flags,
        }
    }

    /// Parameters in declaration order.
    #[inline]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of positional parameters (positional-only included).
    #[inline]
    pub fn arg_count(&self) -> u16 {
        self.arg_count
    }

    /// Number of positional-only parameters.
    #[inline]
    pub fn posonlyarg_count(&self) -> u16 {
        self.posonlyarg_count
    }

    /// Number of keyword-only parameters.
    #[inline]
    pub fn kwonlyarg_count(&self) -> u16 {
        self.kwonlyarg_count
    }

    /// Number of parameters passable either positionally or by name.
    #[inline]
    pub fn flexible_count(&self) -> u16 {
        self.arg_count - self.posonlyarg_count
    }

    /// Get the total parameter count (positional + keyword-only).
    ///
    /// Variadic collectors are not counted.
    #[inline]
    pub fn total_params(&self) -> u16 {
        self.arg_count + self.kwonlyarg_count
    }

    /// Code flags.
    #[inline]
    pub fn flags(&self) -> CodeFlags {
        self.flags
    }

    /// Check if the callable declares `*args`.
    #[inline]
    pub fn has_varargs(&self) -> bool {
        self.flags.contains(CodeFlags::VARARGS)
    }

    /// Check if the callable declares `**kwargs`.
    #[inline]
    pub fn has_varkw(&self) -> bool {
        self.flags.contains(CodeFlags::VARKEYWORDS)
    }

    /// Look up a parameter by name. Linear in the parameter count.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| &*p.name == name)
    }
}

/// Renders the signature the way it would be declared, e.g.
/// `f(a, /, b=..., *args, c, **kw)`.
impl fmt::Display for CodeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.qualname)?;

        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            Ok(())
        };

        for (i, param) in self.params.iter().enumerate() {
            // Bare `*` marks the start of keyword-only parameters when there
            // is no `*args` to do it.
            if param.kind == ParamKind::KeywordOnly
                && !self.has_varargs()
                && self.params[..i]
                    .iter()
                    .all(|p| p.kind != ParamKind::KeywordOnly)
            {
                sep(f)?;
                f.write_str("*")?;
            }

            sep(f)?;
            match param.kind {
                ParamKind::VarPositional => write!(f, "*{}", param.name)?,
                ParamKind::VarKeyword => write!(f, "**{}", param.name)?,
                _ => f.write_str(&param.name)?,
            }
            if param.has_default {
                f.write_str("=...")?;
            }

            let posonly_ends = param.kind == ParamKind::PositionalOnly
                && self
                    .params
                    .get(i + 1)
                    .is_none_or(|next| next.kind != ParamKind::PositionalOnly);
            if posonly_ends {
                sep(f)?;
                f.write_str("/")?;
            }
        }

        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SignatureBuilder;

    #[test]
    fn test_code_flags() {
        let flags = CodeFlags::VARARGS | CodeFlags::VARKEYWORDS;
        assert!(flags.contains(CodeFlags::VARARGS));
        assert!(flags.contains(CodeFlags::VARKEYWORDS));
        assert!(flags.is_variadic());
        assert!(!CodeFlags::NONE.is_variadic());
        assert!(!CodeFlags::VARARGS.contains(CodeFlags::VARKEYWORDS));
    }

    #[test]
    fn test_code_object_new() {
        let code = CodeObject::new("test_func", "test.py");
        assert_eq!(&*code.name, "test_func");
        assert_eq!(&*code.qualname, "test_func");
        assert_eq!(&*code.filename, "test.py");
        assert!(code.params().is_empty());
        assert_eq!(code.total_params(), 0);
        assert!(!code.has_varargs());
        assert!(!code.has_varkw());
    }

    #[test]
    fn test_param_kind_order_matches_grammar() {
        assert!(ParamKind::PositionalOnly < ParamKind::PositionalOrKeyword);
        assert!(ParamKind::PositionalOrKeyword < ParamKind::VarPositional);
        assert!(ParamKind::VarPositional < ParamKind::KeywordOnly);
        assert!(ParamKind::KeywordOnly < ParamKind::VarKeyword);
    }

    #[test]
    fn test_param_mandatory() {
        assert!(Param::new("a", ParamKind::PositionalOrKeyword).is_mandatory());
        assert!(!Param::with_default("a", ParamKind::KeywordOnly).is_mandatory());
        assert!(!Param::new("args", ParamKind::VarPositional).is_mandatory());
    }

    #[test]
    fn test_display_full_grammar() {
        let code = SignatureBuilder::new("f")
            .positional_only("a")
            .param_default("b")
            .var_positional("args")
            .keyword_only("c")
            .var_keyword("kw")
            .finish()
            .unwrap();
        assert_eq!(code.to_string(), "f(a, /, b=..., *args, c, **kw)");
    }

    #[test]
    fn test_display_bare_star() {
        let code = SignatureBuilder::new("g")
            .param("a")
            .keyword_only("b")
            .keyword_only_default("c")
            .finish()
            .unwrap();
        assert_eq!(code.to_string(), "g(a, *, b, c=...)");
    }

    #[test]
    fn test_display_empty() {
        let code = CodeObject::new("h", "test.py");
        assert_eq!(code.to_string(), "h()");
    }

    #[test]
    fn test_param_lookup() {
        let code = SignatureBuilder::new("f")
            .param("a")
            .var_keyword("b")
            .finish()
            .unwrap();
        assert_eq!(code.param("b").map(|p| p.kind), Some(ParamKind::VarKeyword));
        assert!(code.param("c").is_none());
    }
}
