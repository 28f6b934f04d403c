use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_gateway::config::Config;
use api_gateway::grpc::UserProxy;
use api_gateway::routes::configure_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_gateway=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting api-gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "HTTP port = {}, registry = {}",
        config.server.http_port,
        config.registry.registry_url()
    );

    let proxy = web::Data::new(UserProxy::new(config.registry.clone()));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(proxy.clone())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", config.server.http_port))?
    .run()
    .await
}
