//! Create Stash Form Component
//!
//! Form for registering a new stash with the host.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::StashFormFields;
use crate::context::AppContext;
use crate::forms::{FormKind, StashForm};
use crate::store::{store_set_tab, Tab};

/// Create tab contents
#[component]
pub fn CreateStashForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = RwSignal::new(StashForm::default());

    let create_stash = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = form.with_untracked(|f| f.to_payload());
        let bridge = ctx.bridge();

        spawn_local(async move {
            match commands::create_stash(&bridge, &payload).await {
                Ok(()) => {
                    form.set(StashForm::default());
                    store_set_tab(&ctx.store, Tab::List);
                    ctx.reload().await;
                }
                // keep what the user typed
                Err(e) => ctx.report_failure(&e),
            }
        });
    };

    view! {
        <form id="createForm" on:submit=create_stash>
            <h2>{move || ctx.labels.with(|l| l.create_title.clone())}</h2>

            <StashFormFields form=form kind=FormKind::Create />

            <button type="submit" class="btn-primary">
                <i class="fas fa-plus"></i>
                " "
                {move || ctx.labels.with(|l| l.create.clone())}
            </button>
        </form>
    }
}
