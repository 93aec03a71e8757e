// ABOUTME: Configuration types and parsing for rill.yml.
// ABOUTME: Handles YAML parsing, config discovery, and template scaffolding.

use crate::error::{Error, Result};
use crate::stream::{InMemoryDefinitionStore, StreamDefinition};
use crate::types::StreamName;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "rill.yml";
pub const CONFIG_FILENAME_ALT: &str = "rill.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".rill/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Release backend authority, `host:port`.
    pub backend: String,

    /// Per-request timeout against the backend.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Registered stream definitions: name -> DSL text.
    #[serde(default)]
    pub streams: BTreeMap<String, String>,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Seed an in-memory definition store from the configured streams.
    pub fn definition_store(&self) -> Result<InMemoryDefinitionStore> {
        let store = InMemoryDefinitionStore::new();
        for (name, dsl) in &self.streams {
            let name = StreamName::new(name).map_err(|e| Error::InvalidConfig(e.to_string()))?;
            store.insert(StreamDefinition::new(name, dsl.clone()));
        }
        Ok(store)
    }

    pub fn template() -> Self {
        Config {
            backend: "localhost:7577".to_string(),
            request_timeout: default_request_timeout(),
            streams: BTreeMap::from([("ticktock".to_string(), "time | log".to_string())]),
        }
    }
}

pub fn init_config(dir: &Path, backend: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();
    if let Some(b) = backend {
        config.backend = b.to_string();
    }

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"backend: {}
# request_timeout: 30s
streams:
  ticktock: "time | log"
"#,
        config.backend
    )
}
