//! Test doubles
//!
//! In-memory collection server and a view that records what it was asked
//! to do.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::TodoApi;
use crate::controller::TodoView;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};
use crate::notify::Notifier;
use crate::render::ListView;

pub fn todo(id: &str, title: &str, completed: bool) -> Todo {
    Todo {
        id: TodoId::new(id),
        title: title.to_string(),
        completed,
        created_at: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewTodo),
    Patch(TodoId, TodoPatch),
    Remove(TodoId),
}

#[derive(Default)]
struct ServerState {
    todos: RefCell<Vec<Todo>>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<Option<ApiError>>,
    next_id: Cell<u32>,
}

/// Collection server kept in memory. Clones share state.
#[derive(Clone, Default)]
pub struct FakeApi(Rc<ServerState>);

impl FakeApi {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let api = Self::default();
        api.set_todos(todos);
        api
    }

    pub fn set_todos(&self, todos: Vec<Todo>) {
        *self.0.todos.borrow_mut() = todos;
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.0.todos.borrow().clone()
    }

    /// Make the next call of any kind fail with `err`
    pub fn fail_next(&self, err: ApiError) {
        *self.0.fail_next.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.0.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.0.calls.borrow_mut().push(call);
        match self.0.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Server {
            status: 404,
            status_text: "Not Found".into(),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        self.record(Call::List)?;
        Ok(self.todos())
    }

    async fn create(&self, new: &NewTodo) -> ApiResult<Todo> {
        self.record(Call::Create(new.clone()))?;
        let id = self.0.next_id.get() + 1;
        self.0.next_id.set(id);
        let created = Todo {
            id: TodoId::new(format!("new-{id}")),
            title: new.title.clone(),
            completed: new.completed,
            created_at: Some(new.created_at),
        };
        self.0.todos.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn patch(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        self.record(Call::Patch(id.clone(), patch.clone()))?;
        let mut todos = self.0.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(title) = patch.new_title() {
            todo.title = title.to_string();
        }
        if let Some(completed) = patch.new_completed() {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    async fn remove(&self, id: &TodoId) -> ApiResult<()> {
        self.record(Call::Remove(id.clone()))?;
        let mut todos = self.0.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| &t.id != id);
        if todos.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Loading(bool),
    Notify(String),
    Render(ListView),
    ClearInput,
    SeedEdit(String),
    Confirm(String),
    /// Prompt shown, carrying the pre-filled title
    Prompt(String),
}

#[derive(Default)]
struct ViewState {
    events: RefCell<Vec<ViewEvent>>,
    in_flight: Cell<i32>,
    confirm: Cell<bool>,
    prompt: RefCell<Option<String>>,
}

/// View that records every call. Clones share state.
#[derive(Clone, Default)]
pub struct RecordingView(Rc<ViewState>);

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.0.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.events.borrow_mut().clear();
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notify(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<ListView> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Render(list) => Some(list),
            _ => None,
        })
    }

    pub fn render_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ViewEvent::Render(_)))
            .count()
    }

    pub fn is_loading(&self) -> bool {
        self.0.in_flight.get() > 0
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.0.confirm.set(answer);
    }

    pub fn answer_prompt(&self, answer: Option<String>) {
        *self.0.prompt.borrow_mut() = answer;
    }

    fn push(&self, event: ViewEvent) {
        self.0.events.borrow_mut().push(event);
    }
}

impl Notifier for RecordingView {
    fn set_loading(&self, busy: bool) {
        let delta = if busy { 1 } else { -1 };
        self.0.in_flight.set(self.0.in_flight.get() + delta);
        self.push(ViewEvent::Loading(busy));
    }

    fn notify(&self, text: &str) {
        self.push(ViewEvent::Notify(text.to_string()));
    }
}

impl TodoView for RecordingView {
    fn render(&self, list: ListView) {
        self.push(ViewEvent::Render(list));
    }

    fn clear_input(&self) {
        self.push(ViewEvent::ClearInput);
    }

    fn seed_edit(&self, title: &str) {
        self.push(ViewEvent::SeedEdit(title.to_string()));
    }

    fn confirm(&self, question: &str) -> bool {
        self.push(ViewEvent::Confirm(question.to_string()));
        self.0.confirm.get()
    }

    fn prompt(&self, _question: &str, current: &str) -> Option<String> {
        self.push(ViewEvent::Prompt(current.to_string()));
        self.0.prompt.borrow().clone()
    }
}
