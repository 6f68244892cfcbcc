//! # Startup Configuration
//!
//! Typed settings read from the environment exactly once at startup.
//! A missing required variable is a [`ConfigError`], not a panic buried in
//! the middle of request wiring.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::constant::DEFAULT_BIND_ADDR;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("env variable `{0}` is not set")]
    MissingVar(&'static str),

    #[error("unrecognized startup policy `{0}` (expected `degrade` or `fail-fast`)")]
    InvalidPolicy(String),
}

/// What to do when document store initialization fails at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPolicy {
    /// Log the failure and start the server anyway. The store handle stays
    /// `failed` for the life of the process.
    Degrade,
    /// Log the failure and exit non-zero without serving.
    FailFast,
}

/// Application settings resolved from the environment.
///
/// # Environment Variables
///
/// - `CREDENTIAL_PATH` - Required. Path to the service credential file.
/// - `STORE_DATABASE` - Optional. Overrides the database named in the credential.
/// - `STARTUP_POLICY` - Optional. `degrade` (default) or `fail-fast`.
/// - `BIND_ADDR` - Optional. Listen address, defaults to `0.0.0.0:8080`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credential_path: PathBuf,
    pub database_override: Option<String>,
    pub startup_policy: StartupPolicy,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let credential_path = env::var("CREDENTIAL_PATH")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::MissingVar("CREDENTIAL_PATH"))?;

        let database_override = env::var("STORE_DATABASE").ok().filter(|s| !s.is_empty());

        let startup_policy = match env::var("STARTUP_POLICY") {
            Ok(raw) => match raw.to_ascii_lowercase().as_str() {
                "degrade" => StartupPolicy::Degrade,
                "fail-fast" => StartupPolicy::FailFast,
                _ => return Err(ConfigError::InvalidPolicy(raw)),
            },
            Err(_) => StartupPolicy::Degrade,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            credential_path,
            database_override,
            startup_policy,
            bind_addr,
        })
    }
}
