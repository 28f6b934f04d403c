use std::sync::Arc;

use anyhow::{Context, Result};
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service::config::Config;
use user_service::grpc::userhub::users::users_server::UsersServer;
use user_service::grpc::UsersService;
use user_service::repository::InMemoryUserRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting User Service");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Configuration loaded: gRPC port = {}", config.server.grpc_port);

    let repo = Arc::new(InMemoryUserRepository::new());
    let users_service = UsersService::new(repo);

    // Setup health reporting
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<UsersServer<UsersService>>()
        .await;

    let addr = format!("0.0.0.0:{}", config.server.grpc_port)
        .parse()
        .context("Invalid gRPC server address")?;

    info!("Starting gRPC server on {}", addr);

    Server::builder()
        .add_service(health_service)
        .add_service(UsersServer::new(users_service))
        .serve(addr)
        .await
        .context("gRPC server failed")?;

    Ok(())
}
