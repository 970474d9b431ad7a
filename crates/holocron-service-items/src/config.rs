//! Listener configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port when `SERVICE_PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Read `SERVICE_HOST` and `SERVICE_PORT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SERVICE_HOST").ok().as_deref(),
            std::env::var("SERVICE_PORT").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values.
    ///
    /// Unparseable values fall back to the defaults with a warning.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Self {
        let defaults = Self::default();

        let host = match host.map(str::parse::<IpAddr>) {
            Some(Ok(addr)) => addr,
            Some(Err(e)) => {
                tracing::warn!(error = %e, default = %defaults.host, "invalid SERVICE_HOST, using default");
                defaults.host
            }
            None => defaults.host,
        };

        let port = match port.map(str::parse::<u16>) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                tracing::warn!(error = %e, default = defaults.port, "invalid SERVICE_PORT, using default");
                defaults.port
            }
            None => defaults.port,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
