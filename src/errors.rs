use std::{any::Any, num::ParseIntError};

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{data_formats::FailureResponse, JsonResponse};

/// Everything a handler can fail with. The `&'static str` names the failed step for the log.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("http error {0}")]
    Http(StatusCode),
    #[error("could not bind form: {0}")]
    Bind(FormRejection),
    #[error("{0}: {1}")]
    Parse(&'static str, ParseIntError),
    #[error("{0}: {1}")]
    Storage(&'static str, sqlx::Error),
    #[error("{0}: {1}")]
    Template(&'static str, tera::Error),
}

impl From<FormRejection> for RequestError {
    fn from(value: FormRejection) -> Self {
        Self::Bind(value)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::Http(status) => *status,
            RequestError::Bind(rejection) => rejection.status(),
            RequestError::Parse(..) | RequestError::Storage(..) | RequestError::Template(..) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP-typed errors pass their status through silently; the rest are logged
    /// here and reported as a bare 500.
    pub fn to_json_response(&self) -> JsonResponse<FailureResponse> {
        match self {
            RequestError::Http(_) | RequestError::Bind(_) => {
                tracing::debug!(error = %self, "request rejected");
            }
            RequestError::Parse(..) | RequestError::Storage(..) | RequestError::Template(..) => {
                tracing::error!(error = %self, "request failed");
            }
        }
        (self.status_code(), Json(FailureResponse::new()))
    }
}

/// Handler panics end up here and answer like any other internal failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(panic = %detail, "handler panicked");
    RequestError::Http(StatusCode::INTERNAL_SERVER_ERROR).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_keep_their_status() {
        let error = RequestError::Http(StatusCode::NOT_FOUND);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_errors_are_500() {
        let parse = "abc".parse::<i64>().unwrap_err();
        let errors = [
            RequestError::Parse("parse article id", parse),
            RequestError::Storage("get article", sqlx::Error::RowNotFound),
            RequestError::Template("render", tera::Error::msg("boom")),
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn envelope_hides_error_detail() {
        let error = RequestError::Storage("get article", sqlx::Error::RowNotFound);
        let (status, Json(body)) = error.to_json_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.status);
        assert!(body.message.is_empty());
    }

    #[test]
    fn display_names_the_failed_step() {
        let error = RequestError::Storage("list comments", sqlx::Error::RowNotFound);
        assert!(error.to_string().starts_with("list comments: "));
    }

    #[test]
    fn panics_become_the_failure_envelope() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
