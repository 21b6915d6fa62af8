use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::access::AuthRefusal;
use crate::application::use_cases::markdowns::MarkdownError;

/// Uniform `{ success, code, data? }` body written for every request.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(code: &'static str, data: T) -> Self {
        Self {
            success: true,
            code,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn ok(code: &'static str) -> Self {
        Self {
            success: true,
            code,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str) -> Self {
        Self { status, code }
    }

    pub fn invalid_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST_BODY")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Envelope::<()> {
            success: false,
            code: self.code,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AuthRefusal> for ApiError {
    fn from(reason: AuthRefusal) -> Self {
        ApiError::new(StatusCode::FORBIDDEN, reason.code())
    }
}

impl From<MarkdownError> for ApiError {
    fn from(err: MarkdownError) -> Self {
        match err {
            MarkdownError::Forbidden(reason) => reason.into(),
            MarkdownError::NotFound => {
                ApiError::new(StatusCode::NOT_FOUND, "FIND_MARKDOWN_FAILURE")
            }
            MarkdownError::CreateFailure(e) => {
                tracing::warn!(error = ?e, "markdown_create_failed");
                ApiError::new(StatusCode::NOT_FOUND, "CREATE_MARKDOWN_FAILURE")
            }
            MarkdownError::QueryFailure(e) => {
                tracing::error!(error = ?e, "markdown_owner_query_failed");
                ApiError::new(StatusCode::NOT_FOUND, "FIND_USER_MARKDOWN_FAILURE")
            }
            MarkdownError::UpdateFailure => {
                ApiError::new(StatusCode::BAD_REQUEST, "UPDATE_MARKDOWN_FAILURE")
            }
            MarkdownError::DeleteFailure => {
                ApiError::new(StatusCode::BAD_REQUEST, "DELETE_MARKDOWN_FAILURE")
            }
            MarkdownError::Storage(e) => {
                tracing::error!(error = ?e, "markdown_storage_failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        }
    }
}
