//! Stash Admin Frontend App
//!
//! Root component: wires host messages, keyboard and the panel layout.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsValue;

use crate::commands::NuiBridge;
use crate::components::{CreateStashForm, EditStashModal, FailureNotice, PanelHeader, StashList, TabBar};
use crate::config::PanelConfig;
use crate::context::AppContext;
use crate::models::HostMessage;
use crate::preferences::{saved_language, LocalStorage};
use crate::store::{store_apply_host_message, PanelState, PanelStateStoreFields, Tab};

/// Decode and apply one `window.postMessage` payload from the host
fn handle_host_message(ctx: AppContext, data: JsValue) {
    let msg = match serde_wasm_bindgen::from_value::<HostMessage>(data) {
        Ok(msg) => msg,
        Err(e) => {
            log::debug!("[APP] ignoring message: {}", e);
            return;
        }
    };
    log::debug!("[APP] host message: {:?}", msg);
    if let Some(lang) = store_apply_host_message(&ctx.store, msg) {
        ctx.persist_language(&lang);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = PanelConfig::from_host();
    log::info!("[APP] panel for resource '{}'", config.resource_name);

    let language = saved_language(&LocalStorage, &config.language_storage_key)
        .unwrap_or_else(|| config.default_language.clone());
    let store = Store::new(PanelState::new(&language));
    provide_context(store);

    let ctx = AppContext::new(store, NuiBridge::new(config.resource_name.clone()), config);
    provide_context(ctx);

    // Host pushes (openUI / closeUI / refreshStashes / setLanguage)
    let _ = leptos_nui::on_nui_message(move |data| handle_host_message(ctx, data));

    // Escape acts like the close button
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close();
        }
    });

    let app_class = move || if store.visible().get() { "container" } else { "container hidden" };
    let tab_class = move |tab: Tab| {
        move || if store.active_tab().get() == tab { "tab-content active" } else { "tab-content" }
    };

    view! {
        <div id="app" class=app_class>
            <PanelHeader />
            <TabBar />

            <div id="list-tab" class=tab_class(Tab::List)>
                <StashList />
            </div>

            <div id="create-tab" class=tab_class(Tab::Create)>
                <CreateStashForm />
            </div>

            <EditStashModal />
            <FailureNotice />
        </div>
    }
}
