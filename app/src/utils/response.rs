use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::error;

pub enum APIResponse {
    Deleted,
}

impl IntoResponse for APIResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => (StatusCode::NO_CONTENT).into_response(),
        }
    }
}

pub enum APIError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(serde_json::json!({"status": "error", "details": msg})),
        )
            .into_response()
    }
}

impl From<DbErr> for APIError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => {
                error!("Database error: {}", other);
                Self::InternalServerError("Database error".to_string())
            }
        }
    }
}
