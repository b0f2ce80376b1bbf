//! Todo Row Component
//!
//! One task: checkbox, title (or the inline edit widget), Edit and Delete.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_controller, AppContext};
use crate::controller::ToggleOutcome;
use crate::models::TodoId;
use crate::render::RowView;

/// A single task row
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controller = use_controller();
    let messages = ctx.config.with_value(|c| c.messages.clone());

    let RowView {
        id,
        title,
        completed,
        editing,
    } = row;

    // Checkbox state; flips immediately, flips back if the server refuses
    let checked = RwSignal::new(completed);

    let on_toggle = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            let next = event_target_checked(&ev);
            checked.set(next);
            let ctl = controller.get_value();
            let id = id.clone();
            spawn_local(async move {
                if let ToggleOutcome::Reverted(previous) = ctl.toggle(&id, next).await {
                    let _ = checked.try_set(previous);
                }
            });
        }
    };

    let on_edit = {
        let id = id.clone();
        move |_| {
            let ctl = controller.get_value();
            let id = id.clone();
            spawn_local(async move {
                ctl.start_edit(&id).await;
            });
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_| {
            let ctl = controller.get_value();
            let id = id.clone();
            spawn_local(async move {
                ctl.delete(&id).await;
            });
        }
    };

    // Title or edit widget
    let title_part = if editing {
        view! {
            <EditWidget
                id=id.clone()
                save_label=messages.save_label.clone()
                cancel_label=messages.cancel_label.clone()
            />
        }
        .into_any()
    } else {
        let style = if completed { "text-decoration: line-through;" } else { "" };
        view! {
            <div class="todo-title-wrap">
                <span class="todo-title" style=style>{title}</span>
            </div>
        }
        .into_any()
    };

    view! {
        <li
            class=if completed { "todo-item completed" } else { "todo-item" }
            data-id=id.to_string()
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=move || checked.get()
                on:change=on_toggle
            />
            {title_part}
            <button class="btn-edit" on:click=on_edit>{messages.edit_label}</button>
            <button class="btn-delete" on:click=on_delete>{messages.delete_label}</button>
        </li>
    }
}

/// Inline title editor with Save/Cancel
#[component]
fn EditWidget(id: TodoId, save_label: String, cancel_label: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controller = use_controller();
    let input_ref = NodeRef::<html::Input>::new();

    // Rows are rebuilt on every render; only the first mount after a seed
    // takes focus.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if ctx.take_edit_focus() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let on_save = {
        let id = id.clone();
        move |_| {
            let ctl = controller.get_value();
            let id = id.clone();
            let draft = ctx.edit_draft.get_untracked();
            spawn_local(async move {
                ctl.save_edit(&id, &draft).await;
            });
        }
    };

    let on_cancel = move |_| {
        controller.get_value().cancel_edit(&id);
    };

    view! {
        <div class="todo-title-wrap">
            <input
                type="text"
                class="todo-edit-input"
                node_ref=input_ref
                prop:value=move || ctx.edit_draft.get()
                on:input=move |ev| ctx.edit_draft.set(event_target_value(&ev))
            />
            <button class="btn-save" on:click=on_save>{save_label}</button>
            <button class="btn-cancel" on:click=on_cancel>{cancel_label}</button>
        </div>
    }
}
