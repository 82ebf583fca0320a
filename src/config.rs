//! Server configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/mailgrade.yaml";

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load the file when present, fall back to defaults otherwise, then
    /// apply the `PORT` environment override.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            log::warn!("Config file not found: {path}, using defaults");
            Self::default()
        };

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }

        Ok(config)
    }

    /// Write the default configuration as YAML.
    pub fn generate_default(path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(&Self::default())?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {path}"))?;
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
