//! Host configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures are returned as [`ConfigError`] and logged by `main`
//! before exiting non-zero.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Build host config from the environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}
