use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the registry proxy.
///
/// The first four variants are domain outcomes derived from the status
/// code of a completed RPC. `Transport` and `Rpc` pass the underlying
/// failure through unmodified when the exchange itself cannot complete
/// (dial failure, deadline expiry, mid-call reset).
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("user not found")]
    NotFound,

    #[error("user already exists")]
    AlreadyExists,

    #[error("invalid input")]
    InvalidInput,

    #[error("internal failure")]
    Internal,

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("rpc error: {0}")]
    Rpc(#[from] tonic::Status),
}

/// Gateway-level error rendered onto the HTTP boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Proxy(#[from] ProxyError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Proxy(ProxyError::NotFound) => StatusCode::NOT_FOUND,
            GatewayError::Proxy(ProxyError::AlreadyExists) => StatusCode::CONFLICT,
            GatewayError::Proxy(ProxyError::InvalidInput) => StatusCode::BAD_REQUEST,
            GatewayError::Proxy(ProxyError::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Proxy(ProxyError::Transport(_))
            | GatewayError::Proxy(ProxyError::Rpc(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_type = match self {
            GatewayError::Proxy(ProxyError::NotFound) => "NOT_FOUND",
            GatewayError::Proxy(ProxyError::AlreadyExists) => "CONFLICT",
            GatewayError::Proxy(ProxyError::InvalidInput) => "VALIDATION_ERROR",
            GatewayError::Proxy(ProxyError::Internal) => "INTERNAL_ERROR",
            GatewayError::Proxy(ProxyError::Transport(_))
            | GatewayError::Proxy(ProxyError::Rpc(_)) => "UPSTREAM_ERROR",
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        })
    }
}
