//! Decoration configuration for the argus runtime checker.
//!
//! This crate provides:
//! - [`CheckStrategy`] - the closed set of container checking strategies
//! - [`CheckConfig`] - immutable, canonical per-decoration options
//! - [`ConfigCache`] - the canonicalizing cache every configuration comes from
//! - [`default_config`] - the configuration used when none is given

pub mod cache;
pub mod config;
pub mod strategy;
pub mod value;

pub use cache::{ConfigCache, config_cache, init_config_cache};
pub use config::{
    CheckConfig, ConfigError, ConfigFields, ConfigResult, ENV_DEBUG, ENV_STRATEGY, default_config,
};
pub use strategy::{CheckStrategy, ParseStrategyError};
pub use value::OptionValue;
