pub mod config;
pub mod error;
pub mod grpc;
pub mod handlers;
pub mod models;
pub mod routes;
