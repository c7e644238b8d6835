//! Container checking strategies.
//!
//! A strategy bounds how many items of a container the generated wrapper
//! checks per call. Strategies are named after their runtime complexity.
//!
//! | Strategy | Name | Items checked | Status |
//! |----------|------|---------------|--------|
//! | [`NoTime`](CheckStrategy::NoTime) | `O0` | none, checking disabled | usable |
//! | [`ConstantTime`](CheckStrategy::ConstantTime) | `O1` | one pseudo-random item | usable, default |
//! | [`LogarithmicTime`](CheckStrategy::LogarithmicTime) | `Ologn` | `O(log n)` items | reserved |
//! | [`LinearTime`](CheckStrategy::LinearTime) | `On` | every item | reserved |

use std::fmt;
use std::str::FromStr;

/// Container checking strategy.
///
/// The set is closed. Variants compare and order by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum CheckStrategy {
    /// Disable checking entirely.
    NoTime = 0,
    /// Check exactly one pseudo-randomly selected item.
    #[default]
    ConstantTime = 1,
    /// Check `O(log n)` items. Not yet implemented by the generator.
    LogarithmicTime = 2,
    /// Check all items. Not yet implemented by the generator.
    LinearTime = 3,
}

impl CheckStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [CheckStrategy; 4] = [
        CheckStrategy::NoTime,
        CheckStrategy::ConstantTime,
        CheckStrategy::LogarithmicTime,
        CheckStrategy::LinearTime,
    ];

    /// Short complexity name (`O0`, `O1`, `Ologn`, `On`).
    pub const fn name(self) -> &'static str {
        match self {
            CheckStrategy::NoTime => "O0",
            CheckStrategy::ConstantTime => "O1",
            CheckStrategy::LogarithmicTime => "Ologn",
            CheckStrategy::LinearTime => "On",
        }
    }

    /// Variant name as written in Rust.
    pub const fn variant_name(self) -> &'static str {
        match self {
            CheckStrategy::NoTime => "NoTime",
            CheckStrategy::ConstantTime => "ConstantTime",
            CheckStrategy::LogarithmicTime => "LogarithmicTime",
            CheckStrategy::LinearTime => "LinearTime",
        }
    }

    /// Declaration index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a strategy by declaration index.
    ///
    /// Returns `None` for indices outside the enumeration.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(CheckStrategy::NoTime),
            1 => Some(CheckStrategy::ConstantTime),
            2 => Some(CheckStrategy::LogarithmicTime),
            3 => Some(CheckStrategy::LinearTime),
            _ => None,
        }
    }

    /// Check if the wrapper generator can emit this strategy.
    #[inline]
    pub const fn is_implemented(self) -> bool {
        matches!(self, CheckStrategy::NoTime | CheckStrategy::ConstantTime)
    }
}

impl fmt::Display for CheckStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either the short name (`O1`) or the variant name (`ConstantTime`).
impl FromStr for CheckStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s || strategy.variant_name() == s)
            .ok_or_else(|| ParseStrategyError {
                input: s.to_string(),
            })
    }
}

/// Error parsing a strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown checking strategy '{}' (expected one of O0, O1, Ologn, On)",
            self.input
        )
    }
}

impl std::error::Error for ParseStrategyError {}

// =============================================================================
// Tests
// =============================================================================
