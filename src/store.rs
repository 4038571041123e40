//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The stash list is only ever replaced with a full host snapshot; there are
//! no per-record update helpers on purpose.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::i18n;
use crate::models::{HostMessage, StashRecord};

/// Top-level tabs of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    List,
    Create,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct PanelState {
    /// Whether the host asked us to show the panel
    pub visible: bool,
    /// Last snapshot received from the host, in host order
    pub stashes: Vec<StashRecord>,
    /// Active language code (always a registered table)
    pub language: String,
    pub active_tab: Tab,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(i18n::DEFAULT_LANGUAGE)
    }
}

impl PanelState {
    pub fn new(language: &str) -> Self {
        let language = if i18n::is_registered(language) {
            language
        } else {
            i18n::DEFAULT_LANGUAGE
        };
        Self {
            visible: false,
            stashes: Vec::new(),
            language: language.to_string(),
            active_tab: Tab::default(),
        }
    }

    /// Swap in a new snapshot wholesale
    pub fn replace_snapshot(&mut self, stashes: Vec<StashRecord>) {
        self.stashes = stashes;
    }

    /// Switch language; no-op unless `lang` has a table.
    ///
    /// Returns `true` when the language was accepted (the caller persists it).
    pub fn set_language(&mut self, lang: &str) -> bool {
        if !i18n::is_registered(lang) {
            return false;
        }
        self.language = lang.to_string();
        true
    }

    /// Apply a host push message.
    ///
    /// Returns the language to persist if the message switched it.
    pub fn apply_host_message(&mut self, msg: HostMessage) -> Option<String> {
        match msg {
            HostMessage::OpenUi { stashes, lang } => {
                self.visible = true;
                self.replace_snapshot(stashes.unwrap_or_default());
                lang.filter(|l| self.set_language(l))
            }
            HostMessage::CloseUi => {
                self.visible = false;
                None
            }
            HostMessage::RefreshStashes { stashes } => {
                self.replace_snapshot(stashes.unwrap_or_default());
                None
            }
            HostMessage::SetLanguage { lang } => lang.filter(|l| self.set_language(l)),
        }
    }
}

/// Type alias for the store
pub type PanelStore = Store<PanelState>;

/// Get the panel store from context
pub fn use_panel_store() -> PanelStore {
    expect_context::<PanelStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the stash list with a fresh host snapshot
pub fn store_replace_snapshot(store: &PanelStore, stashes: Vec<StashRecord>) {
    log::debug!("[STORE] snapshot replaced ({} stashes)", stashes.len());
    store.stashes().set(stashes);
}

/// Apply a host message to the store, returning the language to persist
pub fn store_apply_host_message(store: &PanelStore, msg: HostMessage) -> Option<String> {
    let mut changed = None;
    store.update(|state| changed = state.apply_host_message(msg));
    changed
}

pub fn store_set_visible(store: &PanelStore, visible: bool) {
    store.visible().set(visible);
}

pub fn store_set_tab(store: &PanelStore, tab: Tab) {
    store.active_tab().set(tab);
}
