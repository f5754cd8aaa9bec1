/*
 * Responsibility
 * - `Authorization: ApiKey <token>` から API key を取り出す
 * - ヘッダ形式の判定のみ。key の照合 (store / revocation) はここでは行わない
 * - ログ出力はしない (呼び出し側の middleware が行う)
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authorization scheme accepted by [`get_api_key`]. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extracts the API key from `Authorization: ApiKey <token>`.
///
/// Only the first `Authorization` value is inspected; an empty value counts as
/// absent. The value is split on the first space, so a token may itself contain
/// spaces. Any UTF-8 token is accepted.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(ApiKeyError::NoAuthHeader)?;

    // HeaderValue::to_str is visible-ASCII only
    let value = std::str::from_utf8(value.as_bytes())
        .map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    match value.split_once(' ') {
        Some((API_KEY_SCHEME, key)) if !key.is_empty() => Ok(key.to_owned()),
        _ => Err(ApiKeyError::MalformedAuthHeader),
    }
}
