use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraftConfig {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_users_path")]
    pub users_path: String,

    #[serde(default = "default_companies_path")]
    pub companies_path: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_companies_path() -> String {
    "/companies".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4000
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            companies_path: default_companies_path(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl GraftConfig {
    /// Load from an explicit path, or `graft.yml` in the working directory,
    /// falling back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| Path::new("graft.yml").to_path_buf());

        if candidate.exists() {
            let content = std::fs::read_to_string(&candidate)?;
            Ok(serde_yaml::from_str(&content)?)
        } else if path.is_some() {
            Err(crate::error::GraftError::Config(format!(
                "Config file not found: {}",
                candidate.display()
            )))
        } else {
            Ok(Self::default())
        }
    }
}
