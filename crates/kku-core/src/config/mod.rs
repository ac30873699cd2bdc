mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::GatewayError;
use defaults::*;

/// Top-level gateway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chatbot: ChatbotConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body, in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

/// Local-storage settings ("sqlite" or "memory").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            db_path: default_db_path(),
        }
    }
}

/// Chatbot pacing and session limits. The bot waits a uniformly random delay in
/// `[reply_delay_min_ms, reply_delay_max_ms]` before answering free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    #[serde(default = "default_reply_delay_min")]
    pub reply_delay_min_ms: u64,
    #[serde(default = "default_reply_delay_max")]
    pub reply_delay_max_ms: u64,
    /// Live sessions kept in memory; the least recently used goes first.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: default_reply_delay_min(),
            reply_delay_max_ms: default_reply_delay_max(),
            max_sessions: default_max_sessions(),
            session_idle_secs: default_session_idle_secs(),
        }
    }
}

impl ChatbotConfig {
    /// No pacing at all (CLI and tests).
    pub fn immediate() -> Self {
        Self {
            reply_delay_min_ms: 0,
            reply_delay_max_ms: 0,
            ..Self::default()
        }
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.reply_delay_min_ms),
            Duration::from_millis(self.reply_delay_max_ms),
        )
    }
}

impl Config {
    /// Reject combinations serde cannot catch on its own.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.chatbot.reply_delay_min_ms > self.chatbot.reply_delay_max_ms {
            return Err(GatewayError::Config(format!(
                "chatbot.reply_delay_min_ms ({}) exceeds reply_delay_max_ms ({})",
                self.chatbot.reply_delay_min_ms, self.chatbot.reply_delay_max_ms
            )));
        }
        if self.chatbot.max_sessions == 0 {
            return Err(GatewayError::Config(
                "chatbot.max_sessions must be at least 1".to_string(),
            ));
        }
        match self.storage.backend.as_str() {
            "sqlite" | "memory" => {}
            other => {
                return Err(GatewayError::Config(format!(
                    "unsupported storage backend: {other}"
                )))
            }
        }
        if self.server.body_limit_bytes == 0 {
            return Err(GatewayError::Config(
                "server.body_limit_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, GatewayError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GatewayError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| GatewayError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
