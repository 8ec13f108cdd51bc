//! Configuration for graphpath
//!
//! Read from an explicit path, or discovered as `config.toml` under
//! `$GRAPHPATH_CONFIG_DIR` or the platform config directory
//! (`~/.config/graphpath/` on Linux). A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

pub use types::{GraphConfig, GraphPathConfig, LogConfig, OutputConfig};

pub const CONFIG_DIR: &str = "graphpath";
pub const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHPATH_CONFIG_DIR";

impl GraphPathConfig {
    /// Location of the discovered config file, if a config dir is known
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `path` is None.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: GraphPathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), kind = %config.graph.kind, "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// An empty graph of the configured kind and capacity
    pub fn build_graph(&self) -> Box<dyn Graph> {
        self.graph.kind.build_with_capacity(self.graph.capacity)
    }
}
