//! REST API types for frontend integration.
//!
//! Request and response bodies are camelCase JSON. Every failure is
//! returned as `{ "status": "error", "error": "<message>" }`.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::error::{AuthError, ExportError, MarketplaceError};
use crate::models::Product;

/// Product page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    pub related: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Create an error body
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

/// An error on its way to the client
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        (self.status, Json(error_response(&self.message))).into_response()
    }
}

/// `Json` body extractor whose rejections use the API error shape,
/// so a malformed or oversized body still answers with JSON.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::from(rejection)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "Request body is too large".to_string()
        } else {
            rejection.body_text()
        };
        Self::new(status, message)
    }
}

impl From<MarketplaceError> for ApiError {
    fn from(err: MarketplaceError) -> Self {
        let status = match &err {
            MarketplaceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MarketplaceError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketplaceError::Export(ExportError::NoLeads) => StatusCode::UNPROCESSABLE_ENTITY,
            MarketplaceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MarketplaceError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        Self::new(status, err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::InvalidCredentials
            | AuthError::InvalidAdminCredentials
            | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden | AuthError::DemoDisabled => StatusCode::FORBIDDEN,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_error_body_shape() {
        let body = error_response("Vendor not found: 9");
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Vendor not found: 9");
    }

    #[test]
    fn test_marketplace_status_codes() {
        let cases = [
            (MarketplaceError::not_found("Lead", "1"), StatusCode::NOT_FOUND),
            (ValidationError::IncompleteLead.into(), StatusCode::BAD_REQUEST),
            (ExportError::NoLeads.into(), StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_auth_status_codes() {
        assert_eq!(ApiError::from(AuthError::EmailTaken).status, StatusCode::CONFLICT);
        assert_eq!(ApiError::from(AuthError::Forbidden).status, StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials).status,
            StatusCode::UNAUTHORIZED
        );
    }
}
