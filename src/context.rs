//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, BridgeError, NuiBridge};
use crate::config::PanelConfig;
use crate::forms::{open_edit_modal, StashForm};
use crate::i18n::t;
use crate::models::StashRecord;
use crate::preferences::{LocalStorage, PreferenceStore};
use crate::store::{store_replace_snapshot, store_set_visible, PanelStateStoreFields, PanelStore};
use crate::view_model::PanelLabels;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: PanelStore,
    bridge: StoredValue<NuiBridge>,
    config: StoredValue<PanelConfig>,
    /// Static labels for the active language
    pub labels: Memo<PanelLabels>,
    /// Failure notice text - read
    pub notice: ReadSignal<Option<String>>,
    /// Failure notice text - write
    set_notice: WriteSignal<Option<String>>,
    /// Contents of the edit modal
    pub edit_form: RwSignal<StashForm>,
    pub edit_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(store: PanelStore, bridge: NuiBridge, config: PanelConfig) -> Self {
        let (notice, set_notice) = signal(None::<String>);
        Self {
            store,
            bridge: StoredValue::new(bridge),
            config: StoredValue::new(config),
            labels: Memo::new(move |_| PanelLabels::resolve(&store.language().get())),
            notice,
            set_notice,
            edit_form: RwSignal::new(StashForm::default()),
            edit_open: RwSignal::new(false),
        }
    }

    pub fn bridge(&self) -> NuiBridge {
        self.bridge.get_value()
    }

    /// Resolve a key in the active language
    pub fn tr(&self, key: &str) -> String {
        t(&self.store.language().get_untracked(), key).to_string()
    }

    /// Replace the list with a host snapshot
    pub fn apply_snapshot(&self, stashes: Vec<StashRecord>) {
        store_replace_snapshot(&self.store, stashes);
    }

    /// Fetch a fresh snapshot after an accepted mutation.
    /// A failure here is reported on its own; the mutation already happened.
    pub async fn reload(self) {
        match commands::refresh_stashes(&self.bridge()).await {
            Ok(stashes) => self.apply_snapshot(stashes),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Remember the language for the next session
    pub fn persist_language(&self, lang: &str) {
        let key = self.config.with_value(|c| c.language_storage_key.clone());
        LocalStorage.save(&key, lang);
        log::debug!("[APP] language set to '{}'", lang);
    }

    /// Hide the panel and let the host release input focus
    pub fn close(&self) {
        store_set_visible(&self.store, false);
        let ctx = *self;
        let bridge = self.bridge();
        spawn_local(async move {
            if let Err(e) = commands::close_panel(&bridge).await {
                ctx.report_failure(&e);
            }
        });
    }

    /// Open the edit modal for a stash in the current snapshot.
    /// Unknown ids leave the modal as it is.
    pub fn open_edit(&self, stash_id: &str) {
        let form = self
            .store
            .stashes()
            .with_untracked(|stashes| open_edit_modal(stashes, stash_id));
        if let Some(form) = form {
            self.edit_form.set(form);
            self.edit_open.set(true);
        }
    }

    pub fn close_edit(&self) {
        self.edit_open.set(false);
    }

    /// Log a failed host call and show a short-lived notice.
    /// State and form contents are left untouched.
    pub fn report_failure(&self, err: &BridgeError) {
        log::warn!("[APP] host call failed: {}", err);
        let message = match err {
            BridgeError::Rejected { .. } => self.tr("requestRejected"),
            other => format!("{}: {}", self.tr("requestFailed"), other),
        };
        self.set_notice.set(Some(message.clone()));

        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            // a newer notice keeps its own timer
            if notice.get_untracked().as_deref() == Some(message.as_str()) {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}
