pub mod config;
pub mod error;
pub mod grpc;
pub mod repository;
