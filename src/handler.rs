//! Route handlers and how the router stores them.
//!
//! Every handler receives the service's [`Store`] alongside the request,
//! so the route table binds plain async functions with no capturing
//! closures. The router keeps them as `Arc<dyn Handler>`, one map per
//! method, and hands each call a clone of its store.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::store::Store;

/// The response future of an erased handler. Tokio may move it between
/// worker threads.
#[doc(hidden)]
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A handler as the router holds it.
pub(crate) type BoxedHandler = Arc<dyn Handler>;

/// Anything the router can dispatch to.
///
/// Implemented for every `Fn(Store, Request) -> impl Future<Output = impl IntoResponse>`,
/// which covers `async fn download(store: Store, req: Request) -> Result<Response, ApiError>`
/// and handlers that ignore the store (`async fn ping(_: Store, _: Request) -> Response`).
pub trait Handler: Send + Sync + 'static {
    #[doc(hidden)]
    fn call(&self, store: Store, req: Request) -> BoxFuture;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Store, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, store: Store, req: Request) -> BoxFuture {
        let fut = self(store, req);
        Box::pin(async move { fut.await.into_response() })
    }
}
