use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the save files live.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub menu_file: String,
    pub pantry_file: String,
    pub orders_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            menu_file: "menu.txt".to_string(),
            pantry_file: "pantry_stock.txt".to_string(),
            orders_file: "orders.txt".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Same settings, rooted at another data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(&self.menu_file)
    }

    pub fn pantry_path(&self) -> PathBuf {
        self.data_dir.join(&self.pantry_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }
}
