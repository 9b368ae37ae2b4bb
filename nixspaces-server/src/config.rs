use anyhow::anyhow;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ENV: &str = "NIXSPACES_BIND";
pub const STATIC_DIR_ENV: &str = "NIXSPACES_STATIC_DIR";
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Built front-end assets. `None` disables static serving.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = lookup(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.into());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("invalid {BIND_ENV} value {bind:?}: {e}"))?;

        let static_dir = lookup(STATIC_DIR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            static_dir,
        })
    }
}
