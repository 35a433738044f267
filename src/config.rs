use crate::api::Range;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "stockwatch";

/// Longest a notice may stay on screen.
pub const MAX_NOTICE_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Static asset roots, searched in order.
    #[serde(default = "default_static_dirs")]
    pub static_dirs: Vec<PathBuf>,
    /// Base URL the terminal client uses to reach the API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub default_range: Range,
    /// How long a notice stays on screen.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("public"), PathBuf::from(".")]
}

fn default_api_url() -> String {
    format!("http://localhost:{}", default_port())
}

fn default_notice_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            static_dirs: default_static_dirs(),
            api_url: default_api_url(),
            default_range: Range::default(),
            notice_secs: default_notice_secs(),
        }
    }
}

impl Config {
    /// Per-user directory holding the config file, the watchlist and the client log.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APP_DIR);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Read `path`, writing defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        if config.static_dirs.is_empty() {
            config.static_dirs = default_static_dirs();
        }
        if config.notice_secs == 0 {
            config.notice_secs = default_notice_secs();
        }
        config.notice_secs = config.notice_secs.min(MAX_NOTICE_SECS);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn server_url(&self) -> String {
        let host = match self.bind.as_str() {
            "127.0.0.1" | "0.0.0.0" | "::" | "::1" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}
