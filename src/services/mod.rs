/*
 * Responsibility
 * - HTTP に依存しないドメイン処理 (ヘッダ解析など)
 */
pub mod auth;
