use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Default Truth Engine origin when `TRUTH_ENGINE_API_URL` is not set.
pub const DEFAULT_API_BASE: &str = "https://ryanguidry.com";
/// Name of the variable the operator must set to select a profile.
pub const HANDLE_ENV: &str = "TRUTH_ENGINE_HANDLE";
const DEFAULT_REVALIDATE_SECONDS: u64 = 60;

/// How the profile page reaches the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Fetch and render while handling `GET /`.
    PreRender,
    /// Serve a loading shell that pulls `/fragment` after mount.
    OnLoad,
}

impl FromStr for RenderStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre-render" | "prerender" | "server" => Ok(RenderStrategy::PreRender),
            "on-load" | "onload" | "client" => Ok(RenderStrategy::OnLoad),
            other => Err(anyhow!(
                "unknown render strategy '{other}' (expected 'pre-render' or 'on-load')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// A missing handle is not a startup error: the page shows the
/// "Profile Unavailable" panel instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub handle: Option<String>,
    pub api_base: String,
    pub render_strategy: RenderStrategy,
    pub revalidate_seconds: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            handle: optional_env(HANDLE_ENV),
            api_base: optional_env("TRUTH_ENGINE_API_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            render_strategy: optional_env("RENDER_STRATEGY")
                .map(|s| s.parse::<RenderStrategy>())
                .transpose()
                .context("RENDER_STRATEGY must be 'pre-render' or 'on-load'")?
                .unwrap_or(RenderStrategy::PreRender),
            revalidate_seconds: optional_env("REVALIDATE_SECONDS")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("REVALIDATE_SECONDS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_REVALIDATE_SECONDS),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
