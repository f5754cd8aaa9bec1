//! `Authorization: ApiKey <key>` の取り出し → ApiKeyCtx を extensions に入れる
//!
//! - key の照合 (store / revocation) は行わない。形式が正しければ通す
//! - 失敗時は 401 + `WWW-Authenticate: ApiKey`。key 自体はログに出さない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// `/api/v1/*` に API key 認証を掛けるための middleware を適用する。
/// `api::v1::routes()` の中で呼ばれる。
///
/// key の照合をしないので state は不要 (`from_fn` で足りる)
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = %ctx.fingerprint, "api key presented");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
