//! Remote Collection Client
//!
//! `TodoApi` is the raw transport to the collection resource;
//! `RemoteCollection` wraps it with the loading indicator and error
//! messages the UI expects.

mod client;
mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

pub use client::RemoteCollection;
pub use http::HttpTodoApi;

/// The four operations of the collection resource
///
/// Futures are `!Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// All records, in server order
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a record; the server assigns its id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Partial update of one record
    async fn patch(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<Todo>;

    /// Delete one record
    async fn remove(&self, id: &TodoId) -> ApiResult<()>;
}
