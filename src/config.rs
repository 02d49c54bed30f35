use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MakeSrtError, Result};

// Default values for segmentation configuration
fn default_endpoint_sec() -> f64 {
    1.0
}

fn default_length_limit() -> Option<usize> {
    Some(16)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub segment: SegmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Minimum silence gap (seconds) between consecutive words that forces
    /// a cue boundary
    #[serde(default = "default_endpoint_sec")]
    pub endpoint_sec: f64,
    /// Maximum number of words per cue; omit for unbounded cues
    #[serde(default = "default_length_limit")]
    pub length_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment: SegmentConfig {
                endpoint_sec: default_endpoint_sec(),
                length_limit: default_length_limit(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MakeSrtError::Config(format!("Failed to read config file: {}", e)))?;

        Ok(toml::from_str(&content)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MakeSrtError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| MakeSrtError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
