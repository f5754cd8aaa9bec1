/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware がヘッダから key を取り出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の照合 (store / revocation) は行っていない。ここにあるのは「提示された」key
 */
use std::fmt;

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// API key が提示されたリクエストに付与されるコンテキスト
///
/// - `key` は `Authorization: ApiKey <key>` の `<key>` 部分そのまま
/// - `fingerprint` は key の SHA-256 (base64url, no padding)。ログ相関用
#[derive(Clone)]
pub struct ApiKeyCtx {
    pub key: String,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: String) -> Self {
        let fingerprint = fingerprint(&key);
        Self { key, fingerprint }
    }
}

// raw key must not reach logs
impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("key", &"<redacted>")
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

fn fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_sha256() {
        // sha256("abc") = ba7816bf...
        let ctx = ApiKeyCtx::new("abc".to_string());
        assert_eq!(ctx.fingerprint, "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
        assert_eq!(ctx.fingerprint, ApiKeyCtx::new("abc".to_string()).fingerprint);
    }

    #[test]
    fn test_debug_redacts_key() {
        let ctx = ApiKeyCtx::new("super-secret".to_string());
        let rendered = format!("{ctx:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains(&ctx.fingerprint));
    }
}
