//! New Todo Form Component
//!
//! Single text input; submitting adds a task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_controller, AppContext};

/// Form for creating new tasks
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controller = use_controller();
    let messages = ctx.config.with_value(|c| c.messages.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = ctx.draft.get_untracked();
        let ctl = controller.get_value();
        spawn_local(async move {
            ctl.submit_new(&input).await;
        });
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                class="todo-input"
                placeholder=messages.input_placeholder
                prop:value=move || ctx.draft.get()
                on:input=move |ev| ctx.draft.set(event_target_value(&ev))
            />
            <button type="submit">{messages.add_label}</button>
        </form>
    }
}
