/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, HTTP の上限値など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => defaults.addr.port(),
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let request_timeout = match std::env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(v) => parse_timeout_seconds(&v)?,
            Err(_) => defaults.request_timeout,
        };

        let request_body_limit_bytes = std::env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.request_body_limit_bytes);

        Ok(Self {
            addr,
            app_env,
            request_timeout,
            request_body_limit_bytes,
        })
    }
}

/// 0 would time out every request
fn parse_timeout_seconds(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            request_timeout: Duration::from_secs(30),
            request_body_limit_bytes: 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_parse() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert!(!AppEnv::parse("").is_production());
    }

    #[test]
    fn test_parse_timeout_seconds() {
        assert_eq!(parse_timeout_seconds("15").unwrap(), Duration::from_secs(15));

        for value in ["0", "", "abc", "-1", "1.5"] {
            let err = parse_timeout_seconds(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid configuration: REQUEST_TIMEOUT_SECONDS",
                "{value}"
            );
        }
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::Invalid("PORT").to_string(),
            "invalid configuration: PORT"
        );
    }
}
