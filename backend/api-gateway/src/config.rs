use serde::Deserialize;
use std::env;

use crate::grpc::ProxyConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// User registry gRPC target
    pub registry: ProxyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP port, defaults to 8080 when not set
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // SERVER_HTTP_PORT is optional; default to 8080
        let http_port = env::var("SERVER_HTTP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            server: ServerConfig { http_port },
            registry: ProxyConfig::from_env(),
        })
    }
}
