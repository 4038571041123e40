//! Failure Notice Component
//!
//! Transient banner shown when a host call fails.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn FailureNotice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.notice.with(Option::is_some)>
            <div class="notice error" role="alert" on:click=move |_| ctx.dismiss_notice()>
                <i class="fas fa-exclamation-triangle"></i>
                " "
                {move || ctx.notice.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
