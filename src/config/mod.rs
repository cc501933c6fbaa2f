//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "BLOG_GRAPHQL_CONFIG";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "BLOG_GRAPHQL_PORT";

/// Server configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "127.0.0.1")
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,

    /// Serve the GraphQL Playground at /graphql/playground
    pub playground: bool,

    /// Load the mock users, posts and comments at startup
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            log_level: "info".to_string(),
            playground: true,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads the file named by `BLOG_GRAPHQL_CONFIG` when set, then applies
    /// `BLOG_GRAPHQL_PORT`.
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Replace the port with a raw override value, if one is given
    pub fn with_port_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            self.port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid port override: {}", raw))?;
        }
        Ok(self)
    }

    /// Address to bind, as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
