/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: API key の取り出し (/api/v1 のみ)
 * - http: request-id / access log / body limit / timeout (全 route)
 */
pub mod auth;
pub mod http;
