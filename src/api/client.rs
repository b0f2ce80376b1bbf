//! Remote collection wrapper
//!
//! Adds the user-facing side of each call: in-flight indicator around the
//! request, a banner on failure, and the read-degrades-to-empty rule.

use super::TodoApi;
use crate::config::Messages;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};
use crate::notify::{Busy, Notifier};

pub struct RemoteCollection<A, N> {
    api: A,
    notifier: N,
    messages: Messages,
}

impl<A: TodoApi, N: Notifier> RemoteCollection<A, N> {
    pub fn new(api: A, notifier: N, messages: Messages) -> Self {
        Self {
            api,
            notifier,
            messages,
        }
    }

    /// All records. A failed read shows a message and yields an empty list.
    pub async fn list(&self) -> Vec<Todo> {
        let _busy = Busy::start(&self.notifier);
        match self.api.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "loaded todos");
                todos
            }
            Err(err) => {
                self.report(&err);
                Vec::new()
            }
        }
    }

    pub async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let _busy = Busy::start(&self.notifier);
        let result = self.api.create(todo).await;
        self.reported(result)
    }

    pub async fn patch(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        let _busy = Busy::start(&self.notifier);
        let result = self.api.patch(id, patch).await;
        self.reported(result)
    }

    pub async fn remove(&self, id: &TodoId) -> ApiResult<()> {
        let _busy = Busy::start(&self.notifier);
        let result = self.api.remove(id).await;
        self.reported(result)
    }

    fn reported<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    fn report(&self, err: &ApiError) {
        tracing::warn!(error = %err, "todo request failed");
        self.notifier.notify(&err.user_message(&self.messages));
    }
}
