//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A path that exists
//! under another method answers `405`, anything else unmatched `404`.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use matchit::Router as MatchitRouter;

use crate::body::{self, BoxError};
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::Store;

/// The application router.
///
/// Owns the [`Store`] every handler is called with. Build it once at
/// startup and pass it to [`Server::serve`](crate::Server::serve), or
/// drive it directly with [`Router::call`] (no socket needed).
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    store: Store,
}

pub(crate) enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

impl Router {
    pub fn new(store: Store) -> Self {
        Self { routes: HashMap::new(), store }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`:
    ///
    /// ```rust,no_run
    /// # use ferry::{Method, Request, Response, Router, Store};
    /// # async fn ping(_: Store, _: Request) -> Response { Response::text("") }
    /// # async fn download(_: Store, _: Request) -> Response { Response::text("") }
    /// Router::new(Store::new("/srv/files"))
    ///     .on(Method::Get, "/ping", ping)
    ///     .on(Method::Get, "/download/{filename}", download);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, method: &http::Method, path: &str) -> Lookup {
        let tree = Method::try_from(method).ok().and_then(|m| self.routes.get(&m));
        if let Some(matched) = tree.and_then(|t| t.at(path).ok()) {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        if self.routes.values().any(|t| t.at(path).is_ok()) {
            Lookup::MethodNotAllowed
        } else {
            Lookup::NotFound
        }
    }

    /// Routes one request and produces one response.
    ///
    /// Every failure is already a [`Response`] (404, 405, 500, ...), so this
    /// never errors.
    pub async fn call<B>(&self, req: http::Request<B>) -> Response
    where
        B: hyper::body::Body<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let (parts, b) = req.into_parts();
        let method = parts.method;
        let path = parts.uri.path().to_owned();

        middleware::trace(&method, &path, async {
            match self.lookup(&method, &path) {
                Lookup::Found(handler, params) => {
                    let req = Request::new(parts.headers, body::boxed(b), params);
                    handler.call(self.store.clone(), req).await
                }
                Lookup::MethodNotAllowed => Response::status(Status::MethodNotAllowed),
                Lookup::NotFound => Response::status(Status::NotFound),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::{BodyExt, Empty};

    use super::*;

    async fn hello(store: Store, req: Request) -> Response {
        let name = req.param("name").unwrap_or("?");
        Response::text(format!("hello {name} from {store:?}"))
    }

    fn router() -> Router {
        Router::new(Store::new("/srv/files")).on(Method::Get, "/hello/{name}", hello)
    }

    fn get(path: &str) -> http::Request<Empty<Bytes>> {
        http::Request::get(path).body(Empty::new()).unwrap()
    }

    #[tokio::test]
    async fn dispatches_with_params_and_the_store() {
        let resp = router().call(get("/hello/ferry")).await;
        assert_eq!(resp.status_code(), Status::Ok);

        let body = resp.into_http().into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("hello ferry from "), "{body}");
        assert!(body.contains("/srv/files"), "{body}");
    }

    #[tokio::test]
    async fn unknown_path_is_404_and_wrong_method_is_405() {
        let router = router();

        let resp = router.call(get("/nope")).await;
        assert_eq!(resp.status_code(), Status::NotFound);

        let post = http::Request::post("/hello/x").body(Empty::<Bytes>::new()).unwrap();
        assert_eq!(router.call(post).await.status_code(), Status::MethodNotAllowed);
    }

    #[tokio::test]
    async fn extension_method_on_known_path_is_405() {
        let req = http::Request::builder()
            .method(http::Method::from_bytes(b"PROPFIND").unwrap())
            .uri("/hello/x")
            .body(Empty::<Bytes>::new())
            .unwrap();
        assert_eq!(router().call(req).await.status_code(), Status::MethodNotAllowed);
    }
}
