use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// The single shared login password. Only its digest is kept in memory.
    pub admin_password: String,
    /// Optional fixed session token; derived from the password when unset.
    pub session_secret: Option<String>,
    /// Mark the session cookie `Secure` (production deployments).
    pub secure_cookies: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            admin_password: env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?,
            session_secret: env::var("SESSION_SECRET").ok(),
            secure_cookies: env::var("APP_ENV")
                .map(|value| value == "production")
                .unwrap_or(false),
        })
    }
}
