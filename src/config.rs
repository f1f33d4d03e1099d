//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! The active backend (mock or remote) is a configuration decision —
//! callers of the facade never know which one is behind it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub guidance: GuidanceConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub name: String,
    /// Active backend: "mock" | "remote"
    pub mode: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    /// Simulated network latency per call, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Base URL the remote path targets, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GuidanceConfig {
    /// Guidance provider: "template" is the only shipped implementation.
    #[serde(default = "default_guidance_provider")]
    pub provider: String,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            provider: default_guidance_provider(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub enabled: bool,
    pub port: u16,
}

fn default_latency_ms() -> u64 {
    300
}

fn default_base_url() -> String {
    "http://127.0.0.1:8620/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_guidance_provider() -> String {
    "template".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }
}
