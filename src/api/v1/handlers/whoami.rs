/*
 * Responsibility
 * - GET /api/v1/whoami
 * - 提示された API key の fingerprint と長さを返す (key 自体は返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
    pub key_length: usize,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        scheme: API_KEY_SCHEME,
        key_length: ctx.key.len(),
        fingerprint: ctx.fingerprint,
    })
}
