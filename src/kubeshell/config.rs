use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROGRAM: &str = "kubectl";
const DEFAULT_NAMESPACE: &str = "default";

/// Configuration for the kubeshell binary, stored as `config.json` in the
/// user config directory. The library itself takes no configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KubeshellConfig {
    /// kubectl binary to invoke (a name resolved on PATH, or a full path)
    #[serde(default = "default_program")]
    pub program: String,

    /// Namespace used when a command does not pass one explicitly
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for KubeshellConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            namespace: default_namespace(),
        }
    }
}

impl KubeshellConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: KubeshellConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
