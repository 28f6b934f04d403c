//! REST CRUD handlers for the /users resource.
//!
//! Each handler delegates to the registry proxy; domain errors map onto
//! HTTP statuses through `GatewayError`.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::error::GatewayError;
use crate::grpc::UserProxy;
use crate::models::UserPayload;

/// GET /api/v1/users
pub async fn list_users(proxy: web::Data<UserProxy>) -> Result<HttpResponse, GatewayError> {
    let users = proxy.get_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/v1/users
pub async fn create_user(
    proxy: web::Data<UserProxy>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, GatewayError> {
    let created = proxy.create(payload.into_inner().into_user(0)).await?;
    info!(user_id = created.id, "User created");
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/v1/users/{email}
pub async fn get_user_by_email(
    proxy: web::Data<UserProxy>,
    path: web::Path<String>,
) -> Result<HttpResponse, GatewayError> {
    let user = proxy.get_by_email(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    proxy: web::Data<UserProxy>,
    path: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, GatewayError> {
    let updated = proxy
        .update(payload.into_inner().into_user(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    proxy: web::Data<UserProxy>,
    path: web::Path<i32>,
) -> Result<HttpResponse, GatewayError> {
    let id = path.into_inner();
    let (_, err) = proxy.delete(id).await;
    if let Some(err) = err {
        return Err(err.into());
    }

    info!(user_id = id, "User deleted");
    Ok(HttpResponse::NoContent().finish())
}
