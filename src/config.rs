//! Runtime configuration for the command line front end.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file first.

use crate::models::{Radix, RadixError};
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "IPFMT_LOG_CONFIG";
pub const ENV_RADIXES: &str = "IPFMT_RADIXES";
pub const ENV_PADDED: &str = "IPFMT_PADDED";
pub const ENV_OUTPUT: &str = "IPFMT_OUTPUT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: '{value}' is not a number")]
    NotANumber { key: &'static str, value: String },

    #[error("{key}: {source}")]
    Radix {
        key: &'static str,
        #[source]
        source: RadixError,
    },

    #[error("{key}: no radix given")]
    NoRadix { key: &'static str },

    #[error("{key}: '{value}' is not a boolean")]
    NotABool { key: &'static str, value: String },

    #[error("{key}: unknown output format '{value}', expected 'table' or 'json'")]
    UnknownOutput { key: &'static str, value: String },
}

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutput {
                key: ENV_OUTPUT,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs YAML file.
    pub log_config: String,
    /// Radixes shown for every address, in display order.
    pub radixes: Vec<Radix>,
    /// Pad address groups to a fixed width.
    pub padded: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            radixes: vec![Radix::BINARY, Radix::DECIMAL, Radix::HEXADECIMAL],
            padded: false,
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(value) = lookup(ENV_RADIXES) {
            config.radixes = parse_radixes(&value)?;
        }
        if let Some(value) = lookup(ENV_PADDED) {
            config.padded = parse_bool(ENV_PADDED, &value)?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = value.parse()?;
        }

        log::debug!("config={:?}", config);
        Ok(config)
    }
}

fn parse_radixes(value: &str) -> Result<Vec<Radix>, ConfigError> {
    let radixes = value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let base: u32 = part.parse().map_err(|_| ConfigError::NotANumber {
                key: ENV_RADIXES,
                value: part.to_string(),
            })?;
            Radix::new(base).map_err(|source| ConfigError::Radix {
                key: ENV_RADIXES,
                source,
            })
        })
        .collect::<Result<Vec<Radix>, ConfigError>>()?;

    if radixes.is_empty() {
        return Err(ConfigError::NoRadix { key: ENV_RADIXES });
    }
    Ok(radixes)
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::NotABool {
            key,
            value: value.to_string(),
        }),
    }
}
