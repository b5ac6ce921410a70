use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use self::lookup::LookupConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod ui;

pub use self::lookup::Environment;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),
        }
    }

    /// Load a JSON config file. Fields it leaves out come from the
    /// environment, then from defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let overlay: Value = serde_json::from_reader(reader)?;
        Config::new().overlay(overlay)
    }

    /// Apply the fields present in `overlay` on top of this config
    pub fn overlay(self, overlay: Value) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        merge(&mut base, overlay);
        Ok(serde_json::from_value(base)?)
    }
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, overlay) => *base = overlay,
    }
}
