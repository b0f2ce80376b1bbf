//! Todo Frontend App
//!
//! Builds the page state and controller, then lays out the form, the list
//! and the two overlays.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::components::{LoadingOverlay, MessageBanner, NewTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::{AppContext, ControllerHandle};
use crate::controller::Controller;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    tracing::info!(url = %config.collection_url(), edit_style = ?config.edit_style, "starting todo frontend");

    // State
    let ctx = AppContext::new(config.clone());
    provide_context(ctx);

    let api = HttpTodoApi::new(config.collection_url());
    let controller: ControllerHandle = StoredValue::new_local(Rc::new(Controller::new(api, ctx, &config)));
    provide_context(controller);

    // Initial load
    Effect::new(move |_| {
        let ctl = controller.get_value();
        spawn_local(async move {
            ctl.refresh().await;
        });
    });

    view! {
        <main class="todo-app">
            <h1>{config.messages.heading.clone()}</h1>
            <NewTodoForm />
            <TodoList />
        </main>
        <LoadingOverlay />
        <MessageBanner />
    }
}
