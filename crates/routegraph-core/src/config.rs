//! Configuration for routegraph
//!
//! Configuration lives in `routegraph.toml`. Every key is optional; a missing
//! file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteGraphError};
use crate::{bail_invalid, bail_usage};

pub use types::{IngestConfig, OutputConfig, RouteGraphConfig};

/// File name looked up by [`RouteGraphConfig::discover`]
pub const CONFIG_FILE: &str = "routegraph.toml";

impl RouteGraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteGraphConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `routegraph.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the config file in `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            RouteGraphError::Other(format!("failed to serialize config: {}", e))
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the ingestion step cannot honour
    pub fn validate(&self) -> Result<()> {
        if !self.ingest.default_cost.is_finite() {
            bail_invalid!("ingest.default_cost", self.ingest.default_cost);
        }
        for (key, value) in [
            ("ingest.from_field", &self.ingest.from_field),
            ("ingest.to_field", &self.ingest.to_field),
            ("ingest.cost_field", &self.ingest.cost_field),
        ] {
            if value.trim().is_empty() {
                bail_usage!(format!("{} must not be empty", key));
            }
        }
        Ok(())
    }
}
