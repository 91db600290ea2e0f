//! `POST /task`: decode a JSON task and echo it.

use serde::Deserialize;

use crate::error::ApiError;
use crate::request::Request;
use crate::response::Response;
use crate::store::Store;

/// A task submitted by the caller. Never stored.
///
/// A missing `name` decodes as empty, so `{}` is a valid task.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub name: String,
}

/// Echoes the decoded request in debug form; malformed JSON is a `400`
/// carrying serde's message.
pub async fn task(_store: Store, req: Request) -> Result<Response, ApiError> {
    let body = req.bytes().await.map_err(ApiError::bad_request)?;
    let task: TaskRequest = serde_json::from_slice(&body).map_err(ApiError::bad_request)?;
    Ok(Response::text(format!("Task Request: {task:?}\n")))
}
