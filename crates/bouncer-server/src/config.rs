use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::ServerError;

/// Optional config file read from the working directory.
pub const CONFIG_FILE: &str = "bouncer.toml";

/// Server configuration, loaded from `bouncer.toml` then overridden by
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind. All interfaces by default.
    pub host: String,
    pub port: u16,
    /// Directory holding the page, stylesheet, and compiled client.
    pub web_root: String,
    /// Document served for `GET /`, relative to `web_root`.
    pub index_file: String,
    /// `Cache-Control` value added to responses that don't set one.
    pub cache_control: String,
    pub compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            web_root: "web".to_string(),
            index_file: "index.html".to_string(),
            cache_control: "no-cache".to_string(),
            compression: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::InvalidAddr(format!("{}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Path of the document served at `/`.
    pub fn index_path(&self) -> PathBuf {
        PathBuf::from(&self.web_root).join(&self.index_file)
    }

    /// Reject configurations the router cannot be built from.
    pub fn validate(&self) -> Result<(), ServerError> {
        self.socket_addr()?;
        if self.web_root.is_empty() {
            return Err(ServerError::Config("web_root must not be empty".to_string()));
        }
        if self.index_file.is_empty() {
            return Err(ServerError::Config(
                "index_file must not be empty".to_string(),
            ));
        }
        if HeaderValue::from_str(&self.cache_control).is_err() {
            return Err(ServerError::Config(format!(
                "cache_control is not a valid header value: {:?}",
                self.cache_control
            )));
        }
        if !self.index_path().is_file() {
            tracing::warn!(
                path = %self.index_path().display(),
                "index document not found; GET / will return 404"
            );
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> Result<Self, ServerError> {
        toml::from_str::<ServerConfig>(content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("PORT")
            && !port.is_empty()
        {
            match port.parse::<u16>() {
                Ok(p) => self.port = p,
                Err(e) => tracing::warn!(value = %port, "Ignoring unparseable PORT: {e}"),
            }
        }
        if let Some(host) = lookup("BOUNCER_HOST")
            && !host.is_empty()
        {
            self.host = host;
        }
        if let Some(root) = lookup("BOUNCER_WEB_ROOT")
            && !root.is_empty()
        {
            self.web_root = root;
        }
        if let Some(index) = lookup("BOUNCER_INDEX_FILE")
            && !index.is_empty()
        {
            self.index_file = index;
        }
    }

    /// Load config from `bouncer.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from {CONFIG_FILE}");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse {CONFIG_FILE}: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No {CONFIG_FILE} found, using defaults");
                ServerConfig::default()
            },
        };

        config.apply_env(|key| std::env::var(key).ok());
        config
    }
}
