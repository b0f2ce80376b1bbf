//! Todo List Component
//!
//! Renders the current `ListView`. Every render throws the old rows away
//! and builds new ones, handlers included.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::render::ListView;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let empty_text = ctx.config.with_value(|c| c.messages.empty_list.clone());

    view! {
        <ul class="todo-list">
            {move || match ctx.list.get() {
                ListView::NotLoaded => ().into_any(),
                ListView::Empty => view! { <li class="empty">{empty_text.clone()}</li> }.into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <TodoRow row=row /> })
                    .collect_view()
                    .into_any(),
            }}
        </ul>
    }
}
