//! Tab Bar Component
//!
//! Switches between the stash list and the create form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_set_tab, use_panel_store, PanelStateStoreFields, Tab};

/// List / Create tab buttons
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_panel_store();

    let tab_button = move |tab: Tab, icon: &'static str| {
        let tab_class = move || {
            if store.active_tab().get() == tab { "tab-btn active" } else { "tab-btn" }
        };
        let text = move || {
            ctx.labels.with(|l| match tab {
                Tab::List => l.list_tab.clone(),
                Tab::Create => l.create_tab.clone(),
            })
        };
        view! {
            <button class=tab_class on:click=move |_| store_set_tab(&store, tab)>
                <i class=icon></i>
                " "
                {text}
            </button>
        }
    };

    view! {
        <div class="tabs">
            {tab_button(Tab::List, "fas fa-list")}
            {tab_button(Tab::Create, "fas fa-plus")}
        </div>
    }
}
