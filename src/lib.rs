//! # ferry
//!
//! A small HTTP file-transfer service.
//!
//! | Endpoint | What it does |
//! |---|---|
//! | `GET /ping` | Liveness: `pong\n` |
//! | `POST /task` | Decodes `{"name": ...}` and echoes it back |
//! | `POST /upload` | Stores the multipart field `afile` under its filename |
//! | `GET /download/{filename}` | Streams a stored file back with sniffed type and size |
//!
//! ## Streaming
//!
//! Uploads and downloads never hold a whole file in memory. Bytes move
//! through one fixed [`transfer::CHUNK_SIZE`] buffer per request
//! ([`transfer::Transfer`]), and the download type is sniffed from the first
//! 512 bytes without disturbing the read position ([`transfer::sniff`]).
//!
//! ## Running it
//!
//! ```rust,no_run
//! use ferry::{Config, Server, Store, routes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ferry::Error> {
//!     let config = Config::default();
//!     let app = routes::app(Store::new(&config.store_root));
//!     Server::bind(config.addr).serve(app).await
//! }
//! ```
//!
//! ## Testing without a socket
//!
//! [`Router::call`] takes any `http::Request` and returns the [`Response`],
//! so handlers are exercised in-process.

mod body;
mod error;
mod handler;
mod method;
mod middleware;
mod request;
mod response;
mod router;
mod server;
mod status;
mod store;

pub mod config;
pub mod handlers;
pub mod health;
pub mod routes;
pub mod transfer;

pub use body::{Body, BoxError};
pub use config::Config;
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
pub use store::Store;
