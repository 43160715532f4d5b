use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::VectorSource;

/// Application configuration loaded from environment variables.
/// Every setting has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog to load instead of the embedded defaults.
    pub catalog_path: Option<PathBuf>,
    pub vector_source: VectorSource,
    /// JSON file for saved interests. In-memory when unset.
    pub interests_store_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_path: optional_env("CATALOG_PATH").map(PathBuf::from),
            vector_source: match optional_env("VECTOR_SOURCE") {
                Some(raw) => raw
                    .parse::<VectorSource>()
                    .map_err(anyhow::Error::msg)
                    .context("VECTOR_SOURCE is invalid")?,
                None => VectorSource::default(),
            },
            interests_store_path: optional_env("INTERESTS_STORE_PATH").map(PathBuf::from),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
