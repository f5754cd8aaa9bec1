/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 全 route に API key middleware を掛ける (/health は app.rs 側で v1 の外に置く)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::whoami::whoami;
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let router = Router::new().route("/whoami", get(whoami));
    middleware::auth::api_key::apply(router)
}
