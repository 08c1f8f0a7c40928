//! Configuration for the Shelf webapp.
//!
//! The counter behavior (element id, scales, reset delay, transition) is
//! data-driven so a deployment can retune the page without recompiling. On
//! the web the config is read from localStorage; anything missing or
//! malformed falls back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISPLAY_ID, DEFAULT_POP_SCALE, DEFAULT_RESET_DELAY_MS, DEFAULT_REST_SCALE,
    DEFAULT_TRANSITION,
};

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Runtime configuration for the counter page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Element id of the counter display
    #[serde(default = "default_display_id")]
    pub display_id: String,

    /// Transform scale applied right after a click
    #[serde(default = "default_pop_scale")]
    pub pop_scale: f32,

    /// Transform scale the counter rests at
    #[serde(default = "default_rest_scale")]
    pub rest_scale: f32,

    /// Delay before a clicked counter scales back down, in milliseconds
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u32,

    /// CSS transition installed when the page is ready
    #[serde(default = "default_transition")]
    pub transition: String,
}

fn default_display_id() -> String {
    DEFAULT_DISPLAY_ID.to_string()
}

fn default_pop_scale() -> f32 {
    DEFAULT_POP_SCALE
}

fn default_rest_scale() -> f32 {
    DEFAULT_REST_SCALE
}

fn default_reset_delay_ms() -> u32 {
    DEFAULT_RESET_DELAY_MS
}

fn default_transition() -> String {
    DEFAULT_TRANSITION.to_string()
}

impl AppConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            display_id: default_display_id(),
            pop_scale: default_pop_scale(),
            rest_scale: default_rest_scale(),
            reset_delay_ms: default_reset_delay_ms(),
            transition: default_transition(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// LocalStorage key for config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "shelf-webapp-config";

    /// Try to load configuration from localStorage.
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }

    /// Save configuration to localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageError("No window object available".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageError(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| ConfigError::StorageError("localStorage not available".to_string()))?;

        let json = self.to_json()?;

        storage
            .set_item(Self::LOCALSTORAGE_KEY, &json)
            .map_err(|e| {
                ConfigError::StorageError(format!("Failed to save to localStorage: {:?}", e))
            })?;

        log::info!("Saved configuration to localStorage");
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading or storing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Storage error (localStorage)
    #[error("Storage error: {0}")]
    StorageError(String),
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let mut config = AppConfig::new();
        config.reset_delay_ms = 125;
        config.display_id = "stored-counter".to_string();

        config.save_to_local_storage().unwrap();
        let loaded = AppConfig::load_from_local_storage().unwrap();

        assert_eq!(loaded.reset_delay_ms, 125);
        assert_eq!(loaded.display_id, "stored-counter");

        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.remove_item(AppConfig::LOCALSTORAGE_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_unparsable_storage_falls_back_to_none() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage
            .set_item(AppConfig::LOCALSTORAGE_KEY, "{ definitely not json")
            .unwrap();

        assert!(AppConfig::load_from_local_storage().is_none());

        storage.remove_item(AppConfig::LOCALSTORAGE_KEY).unwrap();
    }
}
