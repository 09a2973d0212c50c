//! Server Configuration
//!
//! Runtime configuration loaded from environment variables once at
//! startup. A `.env` file is honored via dotenvy in main.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// When unset, measures are held in memory only
    pub database_url: Option<String>,
    pub gemini_api_key: String,
    pub gemini_model: Option<String>,
    pub image_base_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind = env::var("LEITURA_HTTP_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid LEITURA_HTTP_BIND: {bind}"))?;

        let gemini_api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

        Ok(Self {
            bind_addr,
            database_url: env::var("DATABASE_URL").ok(),
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL").ok(),
            image_base_url: env::var("IMAGE_BASE_URL").ok(),
        })
    }
}
