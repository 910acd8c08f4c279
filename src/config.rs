//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{value}`")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos site root (where `/pkg` assets live).
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: directory holding the built `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = std::env::var("SITE_ROOT").ok().filter(|v| !v.trim().is_empty());
        Ok(Self { port, site_root })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

/// Load Leptos options (`[package.metadata.leptos]` / `LEPTOS_*` env) and
/// apply the host overrides.
pub fn leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    options.site_addr = config.bind_addr();
    if let Some(root) = &config.site_root {
        options.site_root = root.as_str().into();
    }
    Ok(options)
}
