use std::{path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

use crate::synthesizer::{
    DEFAULT_SEGMENT_TOLERANCE_DEGREES, DEFAULT_TREND_TOLERANCE_DEGREES, SynthesizerParams,
};

pub const OSRM_URL_ENV_VAR: &str = "MANHATTAN_OSRM_URL";
pub const PROVIDER_TIMEOUT_ENV_VAR: &str = "MANHATTAN_PROVIDER_TIMEOUT_SECS";
pub const TREND_TOLERANCE_ENV_VAR: &str = "MANHATTAN_TREND_TOLERANCE_DEG";
pub const SEGMENT_TOLERANCE_ENV_VAR: &str = "MANHATTAN_SEGMENT_TOLERANCE_DEG";
pub const BIND_ADDR_ENV_VAR: &str = "MANHATTAN_BIND_ADDR";
pub const PORT_ENV_VAR: &str = "PORT";
pub const STATIC_DIR_ENV_VAR: &str = "MANHATTAN_STATIC_DIR";

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} must be a finite, non-negative number of degrees, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Process-wide settings, read once at start-up and handed to whoever needs
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct ManhattanConfig {
    pub osrm_url: String,
    pub provider_timeout: Duration,
    pub trend_tolerance_degrees: f64,
    pub segment_tolerance_degrees: f64,
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ManhattanConfig {
    fn default() -> Self {
        Self {
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            provider_timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
            trend_tolerance_degrees: DEFAULT_TREND_TOLERANCE_DEGREES,
            segment_tolerance_degrees: DEFAULT_SEGMENT_TOLERANCE_DEGREES,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn tolerance(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    let value = parse_or(lookup, name, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidTolerance { name, value });
    }
    Ok(value)
}

impl ManhattanConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any key-value source; unset keys take
    /// their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ManhattanConfig::default();

        Ok(Self {
            osrm_url: lookup(OSRM_URL_ENV_VAR).unwrap_or(defaults.osrm_url),
            provider_timeout: Duration::from_secs(parse_or(
                &lookup,
                PROVIDER_TIMEOUT_ENV_VAR,
                DEFAULT_PROVIDER_TIMEOUT_SECS,
            )?),
            trend_tolerance_degrees: tolerance(
                &lookup,
                TREND_TOLERANCE_ENV_VAR,
                defaults.trend_tolerance_degrees,
            )?,
            segment_tolerance_degrees: tolerance(
                &lookup,
                SEGMENT_TOLERANCE_ENV_VAR,
                defaults.segment_tolerance_degrees,
            )?,
            bind_addr: lookup(BIND_ADDR_ENV_VAR).unwrap_or(defaults.bind_addr),
            port: parse_or(&lookup, PORT_ENV_VAR, defaults.port)?,
            static_dir: lookup(STATIC_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    pub fn synthesizer_params(&self) -> SynthesizerParams {
        SynthesizerParams {
            trend_tolerance_degrees: self.trend_tolerance_degrees,
            segment_tolerance_degrees: self.segment_tolerance_degrees,
        }
    }
}
