//! Loading Overlay Component
//!
//! Full-screen dimmer shown while any request is in flight.

use leptos::prelude::*;

use crate::context::AppContext;

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; display: flex; \
    justify-content: center; align-items: center; background: rgba(0,0,0,0.2);";
const BOX_STYLE: &str = "padding: 12px 18px; border-radius: 8px; background: white; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);";

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let text = ctx.config.with_value(|c| c.messages.loading.clone());

    view! {
        <Show when=move || ctx.loading()>
            <div class="app-loading" style=OVERLAY_STYLE>
                <div style=BOX_STYLE>{text.clone()}</div>
            </div>
        </Show>
    }
}
