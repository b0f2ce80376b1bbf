//! Application Context
//!
//! Page state as Leptos signals, provided via context. This is the
//! browser-side `TodoView` the controller drives.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::config::AppConfig;
use crate::controller::{Controller, TodoView};
use crate::notify::Notifier;
use crate::render::ListView;

pub type AppController = Controller<HttpTodoApi, AppContext>;

/// Controller shared with components. Local storage: the controller is `!Send`.
pub type ControllerHandle = StoredValue<Rc<AppController>, LocalStorage>;

/// Message banner contents
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    /// Bumped per message so a stale timer can't close a newer one
    pub seq: u64,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered list, replaced wholesale on every render
    pub list: RwSignal<ListView>,
    /// New-task input
    pub draft: RwSignal<String>,
    /// Inline edit field
    pub edit_draft: RwSignal<String>,
    pub banner: RwSignal<Option<Banner>>,
    in_flight: RwSignal<u32>,
    banner_seq: StoredValue<u64>,
    /// Set when an edit is seeded, taken by the edit field on mount
    edit_focus: StoredValue<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            list: RwSignal::new(ListView::NotLoaded),
            draft: RwSignal::new(String::new()),
            edit_draft: RwSignal::new(String::new()),
            banner: RwSignal::new(None),
            in_flight: RwSignal::new(0),
            banner_seq: StoredValue::new(0),
            edit_focus: StoredValue::new(false),
            config: StoredValue::new(config),
        }
    }

    /// Any request in flight
    pub fn loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    pub fn dismiss(&self) {
        self.banner.set(None);
    }

    /// Whether the edit field should grab focus. True once per seeded edit.
    pub fn take_edit_focus(&self) -> bool {
        let pending = self.edit_focus.get_value();
        self.edit_focus.set_value(false);
        pending
    }

    /// Put `text` in the banner, returning its sequence number
    fn show_banner(&self, text: &str) -> u64 {
        let seq = self.banner_seq.get_value() + 1;
        self.banner_seq.set_value(seq);
        self.banner.set(Some(Banner {
            seq,
            text: text.to_string(),
        }));
        seq
    }
}

/// Close the banner only if it still shows message `seq`
fn clear_if_current(current: &mut Option<Banner>, seq: u64) {
    if current.as_ref().is_some_and(|b| b.seq == seq) {
        *current = None;
    }
}

impl Notifier for AppContext {
    fn set_loading(&self, busy: bool) {
        self.in_flight.update(|n| {
            *n = if busy { *n + 1 } else { n.saturating_sub(1) };
        });
    }

    fn notify(&self, text: &str) {
        let seq = self.show_banner(text);

        let banner = self.banner;
        let duration = self.config.with_value(|c| c.message_ms);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            banner.update(|current| clear_if_current(current, seq));
        });
    }
}

impl TodoView for AppContext {
    fn render(&self, list: ListView) {
        self.list.set(list);
    }

    fn clear_input(&self) {
        self.draft.set(String::new());
    }

    fn seed_edit(&self, title: &str) {
        self.edit_draft.set(title.to_string());
        self.edit_focus.set_value(true);
    }

    fn confirm(&self, question: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(question).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, question: &str, current: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.prompt_with_message_and_default(question, current).ok())
            .flatten()
    }
}

/// Get the controller from context
pub fn use_controller() -> ControllerHandle {
    use_context::<ControllerHandle>().expect("ControllerHandle should be provided")
}
