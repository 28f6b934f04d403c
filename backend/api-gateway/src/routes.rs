//! Route configuration
//!
//! Centralized route setup; the users domain manages its own routes.

use crate::handlers;
use actix_web::web;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .configure(routes::users::configure),
    );
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod users {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/users")
                    .route("", web::get().to(handlers::list_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("/{email}", web::get().to(handlers::get_user_by_email))
                    .route("/{id}", web::put().to(handlers::update_user))
                    .route("/{id}", web::delete().to(handlers::delete_user)),
            );
        }
    }
}
