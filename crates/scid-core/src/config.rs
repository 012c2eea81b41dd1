use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// SoundCloud's public resolve endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.soundcloud.com/resolve";

/// Client credential sent as `client_id` on every resolve request.
pub const DEFAULT_CLIENT_ID: &str = "788bebab07b8a2a6282710fe2a80467c";

/// Global configuration loaded from `~/.config/scid/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScidConfig {
    /// Resolve endpoint; the query string is appended to it verbatim.
    pub endpoint: String,
    /// Client credential embedded in every request.
    pub client_id: String,
    /// Optional whole-request timeout in seconds (None = libcurl default, i.e. none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional User-Agent header for the GET.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ScidConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ScidConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScidConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ScidConfig> {
    if !path.exists() {
        let default_cfg = ScidConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScidConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
