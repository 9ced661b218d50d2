//! Application configuration

use crate::cli::CommonArgs;
use sentiscope_classifiers::ModelConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Model file and archive locations
    #[serde(default)]
    pub model: ModelConfig,

    /// Optional presentation templates
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, args: &CommonArgs) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            info!("Loading configuration from {}", config_path);
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            debug!("No configuration at {}, using defaults", config_path);
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &args.model {
            config.model.model_path = model.clone();
        }

        if let Some(archive) = &args.archive {
            config.model.archive_path = archive.clone();
        }

        Ok(config)
    }

    /// Socket address to listen on
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server.address, self.server.port).parse()?)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

/// Template file locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Header markup
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Extra stylesheet
    #[serde(default = "default_style_path")]
    pub style_path: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            style_path: default_style_path(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_style_path() -> PathBuf {
    PathBuf::from("style.css")
}
