//! Process configuration, fixed at startup.

use anyhow::{Context, Result};
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_secret: String,
    pub bind: SocketAddr,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `GITHUB_WEBHOOK_SECRET` is required. `BIND` overrides the default
    /// listen address `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self> {
        let webhook_secret =
            std::env::var("GITHUB_WEBHOOK_SECRET").context("GITHUB_WEBHOOK_SECRET required")?;
        let bind = std::env::var("BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.into())
            .parse()
            .context("BIND must be a host:port socket address")?;
        Ok(Self {
            webhook_secret,
            bind,
        })
    }
}
