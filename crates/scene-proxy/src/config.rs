//! Proxy configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ConfigError, ConfigResult, Rgba};

/// Base highlight: green at alpha 20.
const TARGET_COLOR: Rgba = Rgba::new(0, 255, 0, 20);

/// Settings shared by every proxy built from the same selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Color of the wireframe overlay. Its alpha is replaced on every draw.
    pub highlight: Rgba,
    /// Alpha used by [`crate::Drawable::draw_default`].
    pub default_alpha: u8,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            highlight: TARGET_COLOR,
            default_alpha: TARGET_COLOR.a,
        }
    }
}

impl ProxyConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        debug!("Loaded proxy config from {}", path.display());
        Ok(config)
    }

    /// Reject a zero default alpha, which would draw nothing.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_alpha == 0 {
            return Err(ConfigError::InvalidAlpha);
        }
        Ok(())
    }
}
