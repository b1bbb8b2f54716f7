use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "storefront.config.json";

/// Storefront configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// `[program, args...]` that reads a prompt on stdin and prints a completion
    #[serde(default)]
    pub completion_command: Vec<String>,

    /// Reject generated pages with unregistered or invalid sections
    #[serde(default)]
    pub strict_sections: bool,

    /// Where `generate` writes pages
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "pages".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            debug!(path = %config_path.display(), "Loading config");
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))
        } else {
            debug!("No {DEFAULT_CONFIG_NAME}, using defaults");
            Ok(Config::default())
        }
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            completion_command: vec![],
            strict_sections: false,
            out_dir: default_out_dir(),
        }
    }
}
