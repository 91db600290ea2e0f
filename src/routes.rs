//! The service's route table.

use crate::handlers;
use crate::health;
use crate::method::Method;
use crate::router::Router;
use crate::store::Store;

/// Builds the router for all four endpoints, backed by `store`.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET  | `/ping`                 | [`health::ping`] |
/// | POST | `/task`                 | [`handlers::task`] |
/// | POST | `/upload`               | [`handlers::upload`] |
/// | GET  | `/download/{filename}`  | [`handlers::download`] |
pub fn app(store: Store) -> Router {
    Router::new(store)
        .on(Method::Get, "/ping", health::ping)
        .on(Method::Post, "/task", handlers::task)
        .on(Method::Post, "/upload", handlers::upload)
        .on(Method::Get, "/download/{filename}", handlers::download)
}
