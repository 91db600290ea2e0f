//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every dispatched request. Today that is
//! [`trace`]: a per-request span with method, path, status and latency.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `fut` inside a request span and logs the outcome once it resolves.
///
/// For streamed downloads the logged latency covers producing the response
/// head, not delivering the body; the copy task logs its own completion.
pub(crate) async fn trace<F>(method: &http::Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path);
    let started = Instant::now();

    async move {
        let resp = fut.await;
        info!(
            status = u16::from(resp.status_code()),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "handled"
        );
        resp
    }
    .instrument(span)
    .await
}
