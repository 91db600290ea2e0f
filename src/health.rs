//! Liveness probe.
//!
//! ```rust,no_run
//! use ferry::{Method, Router, Store, health};
//!
//! let app = Router::new(Store::new(".")).on(Method::Get, "/ping", health::ping);
//! ```

use crate::{Request, Response, Store};

/// Always `200 OK` with body `pong\n`. If the process can answer HTTP at
/// all, it is alive. The store is never touched.
pub async fn ping(_store: Store, _req: Request) -> Response {
    Response::text("pong\n")
}
