//! Stash Item Component
//!
//! One row of the stash list with its action buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::PanelStateStoreFields;
use crate::view_model::{matches_filter, StashEntryView};

/// A single stash row
#[component]
pub fn StashItem(
    entry: StashEntryView,
    search: ReadSignal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = entry.stash_id.clone();
    let filter_entry = entry.clone();
    let display = move || {
        if matches_filter(&filter_entry, &search.get()) { "flex" } else { "none" }
    };

    let view_id = id.clone();
    let on_view = move |_| {
        let bridge = ctx.bridge();
        let id = view_id.clone();
        spawn_local(async move {
            if let Err(e) = commands::view_stash(&bridge, &id).await {
                ctx.report_failure(&e);
            }
        });
    };

    let edit_id = id.clone();
    let on_edit = move |_| ctx.open_edit(&edit_id);

    let teleport_id = id.clone();
    let on_teleport = move |_| {
        let bridge = ctx.bridge();
        let id = teleport_id.clone();
        let stashes = ctx.store.stashes().get_untracked();
        spawn_local(async move {
            if let Err(e) = commands::teleport_to_stash(&bridge, &stashes, &id).await {
                ctx.report_failure(&e);
            }
        });
    };

    let delete_id = id.clone();
    let on_delete = move |_| {
        let bridge = ctx.bridge();
        let id = delete_id.clone();
        spawn_local(async move {
            match commands::delete_stash(&bridge, &id).await {
                Ok(()) => ctx.reload().await,
                Err(e) => ctx.report_failure(&e),
            }
        });
    };

    view! {
        <div class="stash-item" data-id=id style:display=display>
            <div class="stash-info">
                <h3>{entry.title}</h3>
                <p>{entry.summary}</p>
                <p>{entry.coords_line}</p>
            </div>
            <div class="stash-actions">
                <button class="btn-view" title=entry.view_title on:click=on_view>
                    <i class="fas fa-eye"></i>
                </button>
                <button class="btn-edit" title=entry.edit_title on:click=on_edit>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn-teleport" title=entry.teleport_title on:click=on_teleport>
                    <i class="fas fa-location-arrow"></i>
                </button>
                <button class="btn-delete" title=entry.delete_title on:click=on_delete>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}
