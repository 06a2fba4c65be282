use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_SECONDARY_LANGUAGE: &str = "id-ID";
const DEFAULT_REVALIDATE_SECS: u64 = 60 * 60;
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    /// Language used for the second person lookup (biography text).
    pub secondary_language: String,
    pub revalidate: Duration,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // TMDB answers 401 without a key; that is surfaced per request instead.
        let api_key = match non_empty("TMDB_API_KEY") {
            Some(key) => key,
            None => {
                warn!("TMDB_API_KEY is not set - upstream requests will be rejected");
                String::new()
            }
        };

        let base_url = non_empty("TMDB_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| TMDB_BASE.to_string());
        let language = non_empty("TMDB_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let secondary_language = non_empty("TMDB_SECONDARY_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_SECONDARY_LANGUAGE.to_string());

        let revalidate_secs = match non_empty("TMDB_REVALIDATE_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid TMDB_REVALIDATE_SECS: {}", raw))?,
            None => DEFAULT_REVALIDATE_SECS,
        };
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        info!(
            "TMDB language {} (secondary {}), revalidate {}s",
            language, secondary_language, revalidate_secs
        );

        Ok(Self {
            api_key,
            base_url,
            language,
            secondary_language,
            revalidate: Duration::from_secs(revalidate_secs),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, TMDB_BASE);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.secondary_language, "id-ID");
        assert_eq!(config.revalidate, Duration::from_secs(3600));
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn reads_overrides_and_trims_base_url() {
        let config = Config::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("TMDB_BASE_URL", "http://localhost:9000/3/"),
            ("TMDB_LANGUAGE", "id-ID"),
            ("TMDB_REVALIDATE_SECS", "120"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "http://localhost:9000/3");
        assert_eq!(config.language, "id-ID");
        assert_eq!(config.revalidate, Duration::from_secs(120));
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
