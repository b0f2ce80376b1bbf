//! Message Banner Component
//!
//! Top-right notice. Expires on its own, or the user closes it.

use leptos::prelude::*;

use crate::context::AppContext;

const BANNER_STYLE: &str = "position: fixed; right: 16px; top: 16px; z-index: 9999; \
    padding: 10px 14px; border-radius: 8px; box-shadow: 0 6px 20px rgba(0,0,0,0.12); \
    background: #f8d7da; color: #842029;";

#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dismiss_label = ctx.config.with_value(|c| c.messages.dismiss_label.clone());

    move || {
        let dismiss_label = dismiss_label.clone();
        ctx.banner.get().map(|banner| {
            view! {
                <div class="app-message" role="alert" style=BANNER_STYLE>
                    <span class="app-message-text">{banner.text}</span>
                    <button class="app-message-close" on:click=move |_| ctx.dismiss()>
                        {dismiss_label}
                    </button>
                </div>
            }
        })
    }
}
