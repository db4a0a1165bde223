use anyhow::{Context, Result};

pub const DEFAULT_RANKING_API_URL: &str = "http://127.0.0.1:8000/rank/";

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub ranking_api_url: String,
    pub ranking_timeout_secs: u64,
    /// Upper bound for one inbound request body (resume batches included).
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking_api_url: DEFAULT_RANKING_API_URL.to_string(),
            ranking_timeout_secs: 120,
            max_upload_bytes: 10 * 1024 * 1024,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            ranking_api_url: std::env::var("RANKING_API_URL")
                .unwrap_or(defaults.ranking_api_url),
            ranking_timeout_secs: parse_env("RANKING_TIMEOUT_SECS", defaults.ranking_timeout_secs)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_ranker() {
        let config = Config::default();
        assert_eq!(config.ranking_api_url, "http://127.0.0.1:8000/rank/");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: u16 = parse_env("TALYNX_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(value, 9000);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TALYNX_TEST_BAD_TIMEOUT", "soon");
        let result: Result<u64> = parse_env("TALYNX_TEST_BAD_TIMEOUT", 5);
        assert!(result.is_err());
        std::env::remove_var("TALYNX_TEST_BAD_TIMEOUT");
    }
}
