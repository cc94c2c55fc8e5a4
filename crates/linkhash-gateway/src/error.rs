use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkhash_shortener::ServiceError;
use tracing::{error, info};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// The request itself was malformed.
    BadRequest(String),
    Service(ServiceError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Service(err) => match err {
                ServiceError::InvalidUrl(_) | ServiceError::InvalidSlug(_) => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest(message) => message.clone(),
            AppError::Service(ServiceError::NotFound(_)) => "ID not found".to_string(),
            AppError::Service(ServiceError::Storage(_)) => "internal storage error".to_string(),
            AppError::Service(err) => err.to_string(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        AppError::Service(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = ?self, "request failed");
        } else {
            info!(status = status.as_u16(), error = ?self, "request rejected");
        }

        let body = ErrorResponse {
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
