//! Execution frames.

use argus_code::CodeObject;
use std::fmt;
use std::sync::Arc;

/// Execution frame of a pure-interpretable callable.
///
/// Frames are only used to recover the code object of the callable that is
/// currently executing; no locals are tracked.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Code being executed.
    pub code: Arc<CodeObject>,
    /// Line currently executing.
    pub lineno: u32,
}

impl Frame {
    /// Create a frame positioned at the first line of `code`.
    pub fn new(code: Arc<CodeObject>) -> Self {
        Self {
            lineno: code.first_lineno,
            code,
        }
    }

    /// Create a frame positioned at `lineno`.
    pub fn at_line(code: Arc<CodeObject>, lineno: u32) -> Self {
        Self { code, lineno }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<frame at \"{}\", line {}, code {}>",
            self.code.filename, self.lineno, self.code.qualname
        )
    }
}
