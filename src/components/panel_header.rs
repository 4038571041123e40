//! Panel Header Component
//!
//! Title bar with the close control.

use leptos::prelude::*;

use crate::context::AppContext;

/// Header with title and close button
#[component]
pub fn PanelHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="header">
            <h1>
                <i class="fas fa-box"></i>
                " "
                {move || ctx.labels.with(|l| l.title.clone())}
            </h1>
            <button
                class="close-btn"
                title=move || ctx.labels.with(|l| l.close.clone())
                on:click=move |_| ctx.close()
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
