//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the chat service, the CircleCI connection and command settings.
//! CircleCI values can be overridden from the environment after the file is read.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const ENV_HOST: &str = "CIRCLECI_HOST";
pub const ENV_TOKEN: &str = "CIRCLECI_TOKEN";
pub const ENV_DEFAULT_ORG: &str = "CIRCLECI_DEFAULT_ORG";
pub const ENV_ENDPOINT: &str = "CIRCLECI_ENDPOINT";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub circleci: CircleCiConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl AppConfig {
    /// Read and parse a YAML config file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_yaml(&content)?;
        config.circleci.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse YAML")
    }
}

/// Configuration for the connected chat services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Connection settings for the CircleCI API.
#[derive(Debug, Deserialize, Clone)]
pub struct CircleCiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Organization prepended to bare project names.
    #[serde(default)]
    pub default_org: Option<String>,
    /// Full API base URL; replaces `https://{host}/api/v1` when set.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CircleCiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: None,
            default_org: None,
            endpoint: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl CircleCiConfig {
    /// Apply environment overrides. `lookup` is `std::env::var` in production.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(org) = lookup(ENV_DEFAULT_ORG) {
            self.default_org = Some(org);
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = Some(endpoint);
        }
    }

    pub fn api_base(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}/api/v1", self.host),
        }
    }

    /// Web page for a single build, e.g. `https://circleci.com/gh/acme/widgets/42`.
    pub fn build_page(&self, username: &str, reponame: &str, build_num: u64) -> String {
        format!("https://{}/gh/{}/{}/{}", self.host, username, reponame, build_num)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_host() -> String {
    "circleci.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_prefix() -> String {
    "ci".to_string()
}
