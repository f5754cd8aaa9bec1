/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError を 401 に変換 (code で種類を区別する)
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::{API_KEY_SCHEME, ApiKeyError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    Unauthorized { code: &'static str, message: String },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        res
    }
}

impl From<ApiKeyError> for AppError {
    fn from(e: ApiKeyError) -> Self {
        let code = match e {
            ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
            ApiKeyError::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
        };
        AppError::unauthorized(code, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_errors_map_to_distinct_codes() {
        let no_header = AppError::from(ApiKeyError::NoAuthHeader);
        let malformed = AppError::from(ApiKeyError::MalformedAuthHeader);

        assert_eq!(
            no_header.to_string(),
            "NO_AUTH_HEADER: no authorization header included"
        );
        assert_eq!(
            malformed.to_string(),
            "MALFORMED_AUTH_HEADER: malformed authorization header"
        );
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let res = AppError::from(ApiKeyError::NoAuthHeader).into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey"
        );
    }

    #[test]
    fn test_internal_response_has_no_challenge() {
        let res = AppError::Internal.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
