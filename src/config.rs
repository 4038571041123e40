//! Panel Configuration
//!
//! Defaults for everything the host does not tell us at runtime.

use crate::i18n::DEFAULT_LANGUAGE;

/// Resource name used when the page runs outside the game client
pub const FALLBACK_RESOURCE_NAME: &str = "UniqueDevelopment_StashCreator";

/// localStorage key holding the chosen language code
pub const LANGUAGE_STORAGE_KEY: &str = "stash_lang";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Resource whose NUI callbacks receive our requests
    pub resource_name: String,
    pub language_storage_key: String,
    pub default_language: String,
    /// How long a failure notice stays on screen
    pub notice_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            resource_name: FALLBACK_RESOURCE_NAME.to_string(),
            language_storage_key: LANGUAGE_STORAGE_KEY.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            notice_timeout_ms: 4000,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

impl PanelConfig {
    /// Defaults, with the resource name taken from the embedding host
    pub fn from_host() -> Self {
        let defaults = Self::default();
        Self {
            resource_name: leptos_nui::resource_name(&defaults.resource_name),
            ..defaults
        }
    }
}
