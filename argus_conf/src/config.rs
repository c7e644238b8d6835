//! Decoration-time check configuration.
//!
//! A `CheckConfig` is immutable and canonical: every distinct combination
//! of field values maps to exactly one shared instance, handed out by a
//! [`ConfigCache`]. The wrapper generator memoizes on configuration identity,
//! so two decorations asking for the same options must see the same `Arc`.
//!
//! Options may also be resolved from the environment:
//!
//! | Variable | Field | Accepted values |
//! |----------|-------|-----------------|
//! | `ARGUS_DEBUG` | `debug` | empty or `0` is false, anything else true |
//! | `ARGUS_STRATEGY` | `strategy` | `O0`, `O1`, `Ologn`, `On` or the variant names |

use crate::cache::{ConfigCache, config_cache};
use crate::strategy::{CheckStrategy, ParseStrategyError};
use crate::value::OptionValue;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Environment variable overriding `debug`.
pub const ENV_DEBUG: &str = "ARGUS_DEBUG";
/// Environment variable overriding `strategy`.
pub const ENV_STRATEGY: &str = "ARGUS_STRATEGY";

// =============================================================================
// Errors
// =============================================================================

/// Errors constructing a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `debug` was not a boolean.
    InvalidDebug { value: String, type_name: &'static str },

    /// `strategy` was not a strategy member.
    InvalidStrategy { value: String, type_name: &'static str },

    /// A strategy name did not match any member.
    UnknownStrategy(ParseStrategyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDebug { value, type_name } => {
                write!(f, "debug {} not bool (got {})", value, type_name)
            }
            Self::InvalidStrategy { value, type_name } => {
                write!(f, "strategy {} not CheckStrategy member (got {})", value, type_name)
            }
            Self::UnknownStrategy(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownStrategy(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseStrategyError> for ConfigError {
    fn from(err: ParseStrategyError) -> Self {
        ConfigError::UnknownStrategy(err)
    }
}

/// Result type for configuration construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Config Fields
// =============================================================================

/// Normalized field tuple identifying a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConfigFields {
    /// Report the generated wrapper source.
    pub debug: bool,
    /// Container checking strategy.
    pub strategy: CheckStrategy,
}

impl ConfigFields {
    /// Check dynamically typed option values and normalize them.
    pub fn from_values(debug: &OptionValue, strategy: &OptionValue) -> ConfigResult<Self> {
        let Some(debug) = debug.as_bool() else {
            return Err(ConfigError::InvalidDebug {
                value: debug.to_string(),
                type_name: debug.type_name(),
            });
        };
        let Some(strategy) = strategy.as_strategy() else {
            return Err(ConfigError::InvalidStrategy {
                value: strategy.to_string(),
                type_name: strategy.type_name(),
            });
        };
        Ok(Self { debug, strategy })
    }

    /// Resolve fields from a variable lookup, defaulting unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let debug = lookup(ENV_DEBUG)
            .map(|v| !v.is_empty() && v != "0")
            .unwrap_or(false);

        let strategy = match lookup(ENV_STRATEGY) {
            Some(v) if !v.is_empty() => v.parse::<CheckStrategy>()?,
            _ => CheckStrategy::default(),
        };

        Ok(Self { debug, strategy })
    }
}

// =============================================================================
// Check Configuration
// =============================================================================

/// Immutable, canonical decoration configuration.
///
/// Instances exist only behind the `Arc` returned by a [`ConfigCache`];
/// there is no way to build one that bypasses canonicalization.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckConfig {
    fields: ConfigFields,
}

impl CheckConfig {
    /// Build the instance stored in a cache entry.
    pub(crate) fn from_fields(fields: ConfigFields) -> Self {
        if fields.debug {
            debug!(strategy = %fields.strategy, "conf: debug reporting enabled");
        }
        Self { fields }
    }

    /// Canonical configuration for these options from the global cache.
    pub fn new(debug: bool, strategy: CheckStrategy) -> Arc<Self> {
        config_cache().get_or_create(ConfigFields { debug, strategy })
    }

    /// Canonical configuration for untyped options from the global cache.
    ///
    /// Fails if `debug` is not a boolean or `strategy` is not a strategy
    /// member. Nothing is registered on failure.
    pub fn from_values(debug: &OptionValue, strategy: &OptionValue) -> ConfigResult<Arc<Self>> {
        Self::from_values_in(config_cache(), debug, strategy)
    }

    /// Like [`CheckConfig::from_values`], against an explicit cache.
    pub fn from_values_in(
        cache: &ConfigCache,
        debug: &OptionValue,
        strategy: &OptionValue,
    ) -> ConfigResult<Arc<Self>> {
        let fields = ConfigFields::from_values(debug, strategy)?;
        Ok(cache.get_or_create(fields))
    }

    /// Canonical configuration from `ARGUS_DEBUG` and `ARGUS_STRATEGY`.
    pub fn from_env() -> ConfigResult<Arc<Self>> {
        let fields = ConfigFields::from_lookup(|var| std::env::var(var).ok())?;
        Ok(config_cache().get_or_create(fields))
    }

    /// Field tuple identifying this configuration.
    #[inline]
    pub fn fields(&self) -> ConfigFields {
        self.fields
    }

    /// Whether generated wrapper source is reported.
    #[inline]
    pub fn debug(&self) -> bool {
        self.fields.debug
    }

    /// Container checking strategy.
    #[inline]
    pub fn strategy(&self) -> CheckStrategy {
        self.fields.strategy
    }

    /// Report the wrapper source generated for `target` if `debug` is set.
    ///
    /// Returns whether anything was reported.
    pub fn report_generated(&self, target: &str, source: &str) -> bool {
        if !self.fields.debug {
            return false;
        }
        info!(target: "argus::codegen", func = target, "generated wrapper:\n{}", source);
        true
    }
}

impl fmt::Display for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CheckConfig(debug={}, strategy={})",
            self.fields.debug, self.fields.strategy
        )
    }
}

// =============================================================================
// Default Configuration
// =============================================================================

static DEFAULT_CONFIG: OnceLock<Arc<CheckConfig>> = OnceLock::new();

/// Canonical all-defaults configuration used for callables decorated
/// without explicit options.
pub fn default_config() -> Arc<CheckConfig> {
    Arc::clone(DEFAULT_CONFIG.get_or_init(|| config_cache().get_or_create(ConfigFields::default())))
}

// =============================================================================
// Tests
// =============================================================================
