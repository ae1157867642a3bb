use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file rewritten after every mutation
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: PathBuf::from("students.dat"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl RosterConfig {
    /// Load configuration from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RosterConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
