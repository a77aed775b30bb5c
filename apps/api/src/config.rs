use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which `ContentStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StorageBackend::Local),
            "postgres" | "remote" => Ok(StorageBackend::Postgres),
            other => bail!("STORAGE_BACKEND must be 'local' or 'postgres', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is malformed or a backend's requirements are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    pub local_store_path: PathBuf,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub auth_url: Option<String>,
    pub auth_anon_key: Option<String>,
    /// Simulated generation latency in milliseconds.
    pub generation_delay_ms: u64,
    /// Fixed RNG seed for reproducible generations. Random when unset.
    pub rng_seed: Option<u64>,
    /// Write sample analytics rows next to every saved generation.
    pub seed_analytics: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage_backend = match get("STORAGE_BACKEND") {
            Some(v) => v.parse()?,
            None => StorageBackend::Local,
        };

        let database_url = get("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("Required environment variable 'DATABASE_URL' is not set (STORAGE_BACKEND=postgres)");
        }

        Ok(Config {
            port: parse_or("PORT", get("PORT"), 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            storage_backend,
            local_store_path: get("LOCAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("content_history.json")),
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                10,
            )?,
            auth_url: get("AUTH_URL"),
            auth_anon_key: get("AUTH_ANON_KEY"),
            generation_delay_ms: parse_or("GENERATION_DELAY_MS", get("GENERATION_DELAY_MS"), 0)?,
            rng_seed: get("RNG_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("RNG_SEED must be an unsigned integer")?,
            seed_analytics: parse_or("SEED_ANALYTICS", get("SEED_ANALYTICS"), true)?,
        })
    }

    /// Auth is enabled only when both the URL and the anon key are present.
    pub fn auth_settings(&self) -> Option<(&str, &str)> {
        match (&self.auth_url, &self.auth_anon_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{v}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.storage_backend, StorageBackend::Local);
        assert_eq!(config.local_store_path, PathBuf::from("content_history.json"));
        assert_eq!(config.generation_delay_ms, 0);
        assert_eq!(config.rng_seed, None);
        assert!(config.seed_analytics);
        assert!(config.auth_settings().is_none());
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = config_from(&[("STORAGE_BACKEND", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        let config = config_from(&[
            ("STORAGE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/content"),
        ])
        .unwrap();
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(config_from(&[("STORAGE_BACKEND", "redis")]).is_err());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_seed_delay_and_auth() {
        let config = config_from(&[
            ("RNG_SEED", "42"),
            ("GENERATION_DELAY_MS", "3000"),
            ("SEED_ANALYTICS", "false"),
            ("AUTH_URL", "https://auth.example.com"),
            ("AUTH_ANON_KEY", "anon"),
        ])
        .unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.generation_delay_ms, 3000);
        assert!(!config.seed_analytics);
        assert_eq!(
            config.auth_settings(),
            Some(("https://auth.example.com", "anon"))
        );
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("PORT", "  "), ("AUTH_URL", "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.auth_url.is_none());
    }
}
