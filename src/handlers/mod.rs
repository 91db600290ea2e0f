//! Endpoint handlers.
//!
//! Each handler is an async function of a [`Request`](crate::Request)
//! returning `Result<Response, ApiError>`. Store-backed handlers take the
//! [`Store`](crate::Store) as their first argument; [`routes::app`](crate::routes::app)
//! binds it.

mod download;
mod task;
mod upload;

pub use download::download;
pub use task::{TaskRequest, task};
pub use upload::{FILE_FIELD, upload};
