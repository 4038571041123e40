//! Edit Stash Modal
//!
//! Overlay for changing an existing stash. Opened from a list row with the
//! row's record copied into the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::StashFormFields;
use crate::context::AppContext;
use crate::forms::FormKind;

/// Edit modal (hidden unless a stash is being edited)
#[component]
pub fn EditStashModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = ctx.edit_form;

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = form.with_untracked(|f| f.to_payload());
        let bridge = ctx.bridge();

        spawn_local(async move {
            match commands::update_stash(&bridge, &payload).await {
                Ok(()) => {
                    ctx.close_edit();
                    ctx.reload().await;
                }
                Err(e) => ctx.report_failure(&e),
            }
        });
    };

    let modal_class = move || {
        if ctx.edit_open.get() { "modal" } else { "modal hidden" }
    };

    view! {
        <div id="editModal" class=modal_class>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{move || ctx.labels.with(|l| l.edit_title.clone())}</h2>
                    <button type="button" class="close-btn" on:click=move |_| ctx.close_edit()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <form id="editForm" on:submit=save>
                    <StashFormFields form=form kind=FormKind::Edit />

                    <div class="modal-actions">
                        <button type="submit" class="btn-primary">
                            <i class="fas fa-save"></i>
                            " "
                            {move || ctx.labels.with(|l| l.save.clone())}
                        </button>
                        <button type="button" class="btn-secondary" on:click=move |_| ctx.close_edit()>
                            {move || ctx.labels.with(|l| l.cancel.clone())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
