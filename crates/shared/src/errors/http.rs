use crate::errors::{
    error::ErrorResponse,
    service::{ErrorKind, ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl AppErrorHttp {
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InfrastructureFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("🚨 {:?}", self.0);
        } else {
            warn!("⚠️ {}", self.0);
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.0.public_message(),
        });

        (status, body).into_response()
    }
}
