//! gRPC surface of the user registry.

pub mod server;

pub use server::UsersService;

// Import generated proto code for the service definition
pub mod userhub {
    pub mod users {
        tonic::include_proto!("userhub.users");
    }
}
