use std::path::PathBuf;

use anyhow::Result;

/// Binary configuration loaded from environment variables, with a `.env`
/// file honored when present. Every setting has a default; the library
/// itself never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: std::env::var("FOLIO_OUTPUT_DIR")
                .unwrap_or_else(|_| "dist".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
