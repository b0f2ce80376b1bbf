//! Interaction Controller
//!
//! Turns user gestures into remote calls and keeps the rendered list in
//! step with the server. Owns the last fetched snapshot and the single
//! inline-edit session.

use std::cell::RefCell;

use chrono::Utc;
use thiserror::Error;

use crate::api::{RemoteCollection, TodoApi};
use crate::config::{AppConfig, EditStyle, Messages};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};
use crate::notify::Notifier;
use crate::render::{build_list, ListView};

/// What the controller needs from the page
pub trait TodoView: Notifier {
    /// Replace the whole list with a freshly built view
    fn render(&self, list: ListView);

    /// Empty the new-task input
    fn clear_input(&self);

    /// Pre-fill the inline edit field
    fn seed_edit(&self, title: &str);

    /// Blocking yes/no question
    fn confirm(&self, question: &str) -> bool;

    /// Blocking text question; `None` when dismissed
    fn prompt(&self, question: &str, current: &str) -> Option<String>;
}

/// Inline edit session. At most one row is edited at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task {editing} is already being edited")]
pub struct EditRefused {
    pub editing: TodoId,
}

impl EditState {
    pub fn is_editing(&self, id: &TodoId) -> bool {
        matches!(self, EditState::Editing(current) if current == id)
    }

    pub fn editing_id(&self) -> Option<&TodoId> {
        match self {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    /// State after asking to edit `id`
    pub fn start(&self, id: &TodoId) -> Result<EditState, EditRefused> {
        match self {
            EditState::Editing(current) if current != id => Err(EditRefused {
                editing: current.clone(),
            }),
            _ => Ok(EditState::Editing(id.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input, nothing sent
    Rejected,
    Created(Todo),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// Server accepted; carries the record it returned
    Applied(Todo),
    /// Server refused; the checkbox goes back to this value
    Reverted(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Started,
    /// Another row is being edited
    Refused,
    Saved,
    /// Blank title, nothing sent
    Rejected,
    /// Server refused the new title; the edit stays open
    Failed,
    Cancelled,
    /// Row or edit session no longer exists
    Stale,
}

pub struct Controller<A, V> {
    remote: RemoteCollection<A, V>,
    view: V,
    edit_style: EditStyle,
    messages: Messages,
    snapshot: RefCell<Vec<Todo>>,
    edit: RefCell<EditState>,
}

impl<A: TodoApi, V: TodoView + Clone> Controller<A, V> {
    pub fn new(api: A, view: V, config: &AppConfig) -> Self {
        Self {
            remote: RemoteCollection::new(api, view.clone(), config.messages.clone()),
            view,
            edit_style: config.edit_style,
            messages: config.messages.clone(),
            snapshot: RefCell::new(Vec::new()),
            edit: RefCell::new(EditState::Idle),
        }
    }

    pub fn edit_state(&self) -> EditState {
        self.edit.borrow().clone()
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.snapshot.borrow().clone()
    }

    /// Fetch the collection and re-render. Last completed fetch wins.
    pub async fn refresh(&self) {
        let todos = self.remote.list().await;

        {
            let mut edit = self.edit.borrow_mut();
            let edited_gone = edit
                .editing_id()
                .is_some_and(|id| !todos.iter().any(|t| &t.id == id));
            if edited_gone {
                tracing::debug!("edited task disappeared, leaving edit mode");
                *edit = EditState::Idle;
            }
        }
        *self.snapshot.borrow_mut() = todos;
        self.render();
    }

    pub async fn submit_new(&self, input: &str) -> SubmitOutcome {
        let title = input.trim();
        if title.is_empty() {
            self.view.notify(&self.messages.empty_title);
            return SubmitOutcome::Rejected;
        }

        match self.remote.create(&NewTodo::new(title, Utc::now())).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "task created");
                self.view.clear_input();
                self.refresh().await;
                SubmitOutcome::Created(created)
            }
            Err(_) => SubmitOutcome::Failed,
        }
    }

    /// The checkbox already shows `completed` when this is called
    pub async fn toggle(&self, id: &TodoId, completed: bool) -> ToggleOutcome {
        match self.remote.patch(id, &TodoPatch::completed(completed)).await {
            Ok(updated) => {
                {
                    let mut snapshot = self.snapshot.borrow_mut();
                    if let Some(slot) = snapshot.iter_mut().find(|t| t.id == updated.id) {
                        *slot = updated.clone();
                    }
                }
                self.render();
                ToggleOutcome::Applied(updated)
            }
            Err(_) => ToggleOutcome::Reverted(!completed),
        }
    }

    pub async fn delete(&self, id: &TodoId) -> DeleteOutcome {
        if !self.view.confirm(&self.messages.confirm_delete) {
            return DeleteOutcome::Declined;
        }

        match self.remote.remove(id).await {
            Ok(()) => {
                tracing::info!(%id, "task deleted");
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(_) => DeleteOutcome::Failed,
        }
    }

    pub async fn start_edit(&self, id: &TodoId) -> EditOutcome {
        let Some(current) = self.title_of(id) else {
            tracing::warn!(%id, "edit requested for unknown task");
            return EditOutcome::Stale;
        };

        match self.edit_style {
            EditStyle::Inline => self.start_inline_edit(id, &current),
            EditStyle::Prompt => self.prompt_edit(id, &current).await,
        }
    }

    pub async fn save_edit(&self, id: &TodoId, title: &str) -> EditOutcome {
        if !self.edit.borrow().is_editing(id) {
            return EditOutcome::Stale;
        }
        let title = title.trim();
        if title.is_empty() {
            self.view.notify(&self.messages.empty_title);
            return EditOutcome::Rejected;
        }

        match self.remote.patch(id, &TodoPatch::title(title)).await {
            Ok(_) => {
                {
                    let mut edit = self.edit.borrow_mut();
                    if edit.is_editing(id) {
                        *edit = EditState::Idle;
                    }
                }
                self.refresh().await;
                EditOutcome::Saved
            }
            // Widget stays open with the draft so the user can retry or cancel.
            Err(_) => EditOutcome::Failed,
        }
    }

    pub fn cancel_edit(&self, id: &TodoId) -> EditOutcome {
        {
            let mut edit = self.edit.borrow_mut();
            if !edit.is_editing(id) {
                return EditOutcome::Stale;
            }
            *edit = EditState::Idle;
        }
        self.render();
        EditOutcome::Cancelled
    }

    fn start_inline_edit(&self, id: &TodoId, current: &str) -> EditOutcome {
        let next = self.edit.borrow().start(id);
        match next {
            Ok(next) if *self.edit.borrow() == next => EditOutcome::Started,
            Ok(next) => {
                *self.edit.borrow_mut() = next;
                self.view.seed_edit(current);
                self.render();
                EditOutcome::Started
            }
            Err(refused) => {
                tracing::debug!(error = %refused, "edit refused");
                self.view.notify(&self.messages.edit_in_progress);
                EditOutcome::Refused
            }
        }
    }

    async fn prompt_edit(&self, id: &TodoId, current: &str) -> EditOutcome {
        let Some(answer) = self.view.prompt(&self.messages.edit_prompt, current) else {
            return EditOutcome::Cancelled;
        };
        let title = answer.trim();
        if title.is_empty() {
            self.view.notify(&self.messages.empty_title);
            return EditOutcome::Rejected;
        }

        match self.remote.patch(id, &TodoPatch::title(title)).await {
            Ok(_) => {
                self.refresh().await;
                EditOutcome::Saved
            }
            Err(_) => EditOutcome::Failed,
        }
    }

    fn title_of(&self, id: &TodoId) -> Option<String> {
        self.snapshot
            .borrow()
            .iter()
            .find(|t| &t.id == id)
            .map(|t| t.title.clone())
    }

    fn render(&self) {
        let list = build_list(&self.snapshot.borrow(), &self.edit.borrow());
        self.view.render(list);
    }
}
