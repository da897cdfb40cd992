//! Configuration management
//!
//! Settings live in `settings.json` inside the greeter directory:
//! ```json
//! { "databaseFilename": "greeter.duckdb" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

fn default_database_filename() -> String {
    "greeter.duckdb".to_string()
}

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default = "default_database_filename")]
    database_filename: String,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            database_filename: default_database_filename(),
        }
    }
}

/// Greeter configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_filename: default_database_filename(),
        }
    }
}

impl Config {
    /// Load config from the greeter directory
    ///
    /// A missing or malformed settings file falls back to defaults.
    pub fn load(greeter_dir: &Path) -> Result<Self> {
        let settings_path = greeter_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            database_filename: raw.database_filename,
        })
    }
}
