//! Configuration for the registry-facing gRPC client.

use serde::{Deserialize, Serialize};
use std::env;

/// Connection target for the user registry.
///
/// Passed explicitly to the proxy constructor rather than read from
/// ambient process state. Defaults to `127.0.0.1:9000`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Registry host, defaults to 127.0.0.1
    pub host: String,
    /// Registry gRPC port, defaults to 9000
    pub port: u16,
}

impl ProxyConfig {
    /// Load the registry target from REGISTRY_GRPC_HOST / REGISTRY_GRPC_PORT,
    /// falling back to the documented defaults.
    pub fn from_env() -> Self {
        let host =
            env::var("REGISTRY_GRPC_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("REGISTRY_GRPC_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(9000);

        Self { host, port }
    }

    /// URL suitable for a tonic Endpoint.
    pub fn registry_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
        }
    }
}
