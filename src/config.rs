use crate::error::{OkraError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".okra.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkraConfig {
    /// Data file, relative to the working directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    "todo_data.json".to_string()
}

impl Default for OkraConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl OkraConfig {
    /// Loads `.okra.toml` from the given directory. A missing config file is
    /// not an error, the defaults apply; there is no init step.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: OkraConfig =
            toml::from_str(&content).map_err(|e| OkraError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn data_path(&self, dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            dir.join(file)
        }
    }
}
