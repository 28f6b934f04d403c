//! gRPC plumbing for talking to the user registry.
//!
//! This module contains:
//! - The generated protobuf stubs
//! - The client-side proxy used by the REST handlers

pub mod clients;
pub mod config;

pub use clients::UserProxy;
pub use config::ProxyConfig;

// Import generated proto code
pub mod userhub {
    pub mod users {
        tonic::include_proto!("userhub.users");
    }
}
