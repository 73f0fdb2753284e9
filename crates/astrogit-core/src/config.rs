//! Card configuration.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HoroscopeError, HoroscopeResult};

/// Branding, share target and timing used by the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Product name used in the export footer
    pub product_name: String,
    /// Host shown in the export footer
    pub product_host: String,
    /// URL attached to social shares
    pub canonical_url: String,
    /// Post-compose endpoint of the social network
    pub share_endpoint: String,
    /// How many characters of the message go into a share
    pub share_excerpt_chars: usize,
    /// How long the "copied" indicator stays on
    pub copied_hold_ms: u64,
    /// Name shown when none is given
    pub default_username: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            product_name: "AstroGit".to_string(),
            product_host: "astrogit.vercel.app".to_string(),
            canonical_url: "https://astrogit.vercel.app".to_string(),
            share_endpoint: "https://twitter.com/intent/tweet".to_string(),
            share_excerpt_chars: 100,
            copied_hold_ms: 2000,
            default_username: "Developer".to_string(),
        }
    }
}

impl CardConfig {
    pub fn copied_hold(&self) -> Duration {
        Duration::from_millis(self.copied_hold_ms)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> HoroscopeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HoroscopeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| HoroscopeError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Load the explicit path if given, else the default location if it
    /// exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> HoroscopeResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/astrogit/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("astrogit").join("config.json"))
}
