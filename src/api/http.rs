//! HTTP transport
//!
//! JSON over `fetch` against `{base}/{collection}`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    collection_url: String,
}

impl HttpTodoApi {
    pub fn new(collection_url: impl Into<String>) -> Self {
        Self {
            collection_url: collection_url.into(),
        }
    }

    fn record_url(&self, id: &TodoId) -> String {
        format!("{}/{}", self.collection_url, id.path_segment())
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let url = &self.collection_url;
        let request = Request::get(url).build().map_err(request_error)?;
        let response = send("GET", url, request).await?;
        decode(&response).await
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let url = &self.collection_url;
        let request = Request::post(url).json(todo).map_err(request_error)?;
        let response = send("POST", url, request).await?;
        decode(&response).await
    }

    async fn patch(&self, id: &TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        let url = self.record_url(id);
        let request = Request::patch(&url).json(patch).map_err(request_error)?;
        let response = send("PATCH", &url, request).await?;
        decode(&response).await
    }

    async fn remove(&self, id: &TodoId) -> ApiResult<()> {
        let url = self.record_url(id);
        let request = Request::delete(&url).build().map_err(request_error)?;
        // Body is either `{}` or the deleted record; neither is needed.
        send("DELETE", &url, request).await.map(|_| ())
    }
}

async fn send(method: &'static str, url: &str, request: Request) -> ApiResult<Response> {
    tracing::debug!(method, url, "sending request");

    let response = request.send().await.map_err(|err| {
        tracing::warn!(method, url, error = %err, "request failed");
        classify(err)
    })?;

    if !response.ok() {
        tracing::warn!(method, url, status = response.status(), "server rejected request");
        return Err(ApiError::Server {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Map a failed `send()` onto the error taxonomy
fn classify(err: gloo_net::Error) -> ApiError {
    match err {
        // fetch() rejected: the request left but nothing came back
        gloo_net::Error::JsError(js) => ApiError::Network(js.to_string()),
        other => ApiError::Request(other.to_string()),
    }
}

fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Request(err.to_string())
}
