//! User settings for the expense ledger
//!
//! Holds display preferences, the seed list of categories offered to the
//! user, and whether mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::category::DEFAULT_CATEGORIES;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol printed in front of amounts (display only, no conversion)
    #[serde(default)]
    pub currency_symbol: String,

    /// Categories offered before any expense uses them
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Whether mutations are appended to audit.log
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_audit_log() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: String::new(),
            categories: default_categories(),
            audit_log: default_audit_log(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Persistence(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Not saved here; `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
