//! Deployment configuration for `pagehead.toml`.
//!
//! Describes the on-disk layout of a deployment: where the filesystem root
//! is, which directories hold each extension type, what URL prefix the root
//! is served under, and the optional group override directory that redirects
//! component asset lookups to shared content.
//!
//! ```toml
//! root = "/srv/hub"
//! base_url = "/"
//!
//! [extensions]
//! components = "components"
//! modules = "modules"
//! plugins = "plugins"
//!
//! [group]
//! root = "/srv/hub/site/groups/research"
//! ```
//!
//! All fields default, so `DeployConfig::default()` is a working layout
//! rooted at the current directory.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Deployment layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Filesystem root of the deployment.
    pub root: PathBuf,
    /// URL prefix the root is served under. Must be root-relative.
    pub base_url: String,
    /// Directory names for each extension type, relative to `root`.
    pub extensions: ExtensionDirs,
    /// Group override settings.
    pub group: GroupConfig,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base_url: "/".to_string(),
            extensions: ExtensionDirs::default(),
            group: GroupConfig::default(),
        }
    }
}

/// Directory names holding each extension type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionDirs {
    pub components: String,
    pub modules: String,
    pub plugins: String,
}

impl Default for ExtensionDirs {
    fn default() -> Self {
        Self {
            components: "components".to_string(),
            modules: "modules".to_string(),
            plugins: "plugins".to_string(),
        }
    }
}

/// Group override: a deployment-level directory that redirects
/// component asset lookups to shared content.
///
/// Absent in the common case; inject calls then pass component assets
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Override directory. Component CSS/JS sources are rewritten to
    /// `<root>/assets/<css|js>/<file>` when set.
    pub root: Option<PathBuf>,
}

impl DeployConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the deployment root (builder style).
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must be root-relative (start with '/'), got `{}`",
                self.base_url
            )));
        }
        for (name, dir) in [
            ("extensions.components", &self.extensions.components),
            ("extensions.modules", &self.extensions.modules),
            ("extensions.plugins", &self.extensions.plugins),
        ] {
            if dir.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Re-express a source path under `root` as a served URL.
    ///
    /// Handles root-prefix stripping and cross-platform separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not within the deployment root.
    pub fn url_for(&self, path: &Path) -> Result<String> {
        let rel = path.strip_prefix(&self.root).map_err(|_| {
            anyhow!("path is not under the deployment root: {}", path.display())
        })?;

        let rel = rel.to_string_lossy().replace('\\', "/");
        let base = self.base_url.trim_end_matches('/');
        Ok(format!("{base}/{rel}"))
    }
}
