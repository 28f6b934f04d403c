use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// gRPC server configuration
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// gRPC port, defaults to 9000 when not set
    pub grpc_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // SERVER_GRPC_PORT is optional; default to 9000
        let grpc_port = env::var("SERVER_GRPC_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(9000);

        Ok(Self {
            server: ServerConfig { grpc_port },
        })
    }
}
