//! Stash List Component
//!
//! Search box plus the rendered snapshot.

use leptos::prelude::*;

use crate::components::StashItem;
use crate::context::AppContext;
use crate::store::{use_panel_store, PanelStateStoreFields};
use crate::view_model::{self, StashListView};

/// Searchable list of all stashes in the current snapshot
#[component]
pub fn StashList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_panel_store();
    let (search, set_search) = signal(String::new());

    // Whole list is re-rendered from the snapshot, never patched
    let list = Memo::new(move |_| {
        view_model::render(&store.stashes().get(), &store.language().get())
    });

    view! {
        <div class="search-box">
            <i class="fas fa-search"></i>
            <input
                type="text"
                id="searchInput"
                placeholder=move || ctx.labels.with(|l| l.search_placeholder.clone())
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
        </div>

        <div id="stashList" class="stash-list">
            {move || match list.get() {
                StashListView::Empty { message } => view! {
                    <div class="empty-state">
                        <i class="fas fa-box-open"></i>
                        <p>{message}</p>
                    </div>
                }.into_any(),
                StashListView::Entries(entries) => entries
                    .into_iter()
                    .map(|entry| view! { <StashItem entry=entry search=search /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
