use super::super::SummarizeSettings;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub server: ServerConfig,

    /// Persisted request defaults; `language` doubles as the UI locale.
    #[serde(default)]
    pub summarize: SummarizeSettings,

    #[serde(default)]
    pub export: ExportConfig,
}

// ── Remote service ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the summarization service (default: http://127.0.0.1:8001)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout; map-reduce runs over long documents are slow
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8001".into()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// ── Export ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported `.md` files; `~` is expanded. Empty = current dir.
    #[serde(default)]
    pub directory: String,
    /// File name prefix; empty uses the localized default ("summary" / "摘要").
    #[serde(default)]
    pub file_prefix: String,
}

impl ExportConfig {
    pub fn resolved_directory(&self) -> PathBuf {
        let trimmed = self.directory.trim();
        if trimmed.is_empty() {
            return PathBuf::from(".");
        }
        PathBuf::from(shellexpand::tilde(trimmed).into_owned())
    }
}

pub(super) fn config_dir() -> PathBuf {
    let home = UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
    home.join(".mmsummary")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: config_dir().join("config.toml"),
            server: ServerConfig::default(),
            summarize: SummarizeSettings::default(),
            export: ExportConfig::default(),
        }
    }
}
