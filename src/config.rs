//! Server configuration from environment variables
//!
//! | Variable            | Default                    |
//! |---------------------|----------------------------|
//! | `BIND_ADDR`         | `0.0.0.0`                  |
//! | `PORT`              | `3000`                     |
//! | `PERENUAL_API_KEY`  | empty                      |
//! | `PERENUAL_BASE_URL` | `https://perenual.com/api` |
//!
//! Unparseable values are logged and replaced by their default.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_BASE_URL: &str = "https://perenual.com/api";
pub const DEFAULT_PORT: u16 = 3000;

/// Where and how the gateway reaches the plant API
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub gateway: GatewayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            gateway: GatewayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid BIND_ADDR {:?}, using {}", raw, defaults.bind_addr);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let base_url = lookup("PERENUAL_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.gateway.base_url);

        let api_key = lookup("PERENUAL_API_KEY")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if api_key.is_empty() {
            tracing::warn!("PERENUAL_API_KEY is not set; searches will use the embedded fallback plants");
        }

        Self {
            bind_addr,
            port,
            gateway: GatewayConfig { base_url, api_key },
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
