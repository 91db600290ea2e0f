//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. Small bodies are
//! held in memory; file downloads hand over a streaming [`Body`] whose
//! length is declared up front with a `content-length` header.

use http::header::{CONTENT_TYPE, HeaderName};
use http::{HeaderMap, HeaderValue};

use crate::body::{self, Body};
use crate::status::Status;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use ferry::{Response, Status};
///
/// Response::text("pong\n");
/// Response::status(Status::NotFound);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use ferry::{Response, Status};
///
/// Response::builder()
///     .status(Status::BadRequest)
///     .text("key must be a string at line 1 column 2\n");
/// ```
pub struct Response {
    pub(crate) body: Body,
    pub(crate) headers: HeaderMap,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: body::empty(), headers: HeaderMap::new(), status: code }
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: HeaderMap::new(), status: Status::Ok }
    }

    /// Status this response will be sent with.
    pub fn status_code(&self) -> Status {
        self.status
    }

    /// Converts into the `http` representation hyper serves.
    pub fn into_http(self) -> http::Response<Body> {
        let mut resp = http::Response::new(self.body);
        *resp.status_mut() = self.status.into();
        *resp.headers_mut() = self.headers;
        resp
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method. Header values are already validated
/// [`HeaderValue`]s, so building never fails.
pub struct ResponseBuilder {
    headers: HeaderMap,
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Sets a header, replacing any earlier value under the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(mut self, body: impl Into<String>) -> Response {
        self.headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static(TEXT_PLAIN));
        Response { body: body::full(body.into()), headers: self.headers, status: self.status }
    }

    /// Terminate with a streaming body.
    ///
    /// The caller sets `content-type` and `content-length` through
    /// [`header`](Self::header) beforehand: once the first body byte is
    /// on the wire the head can no longer change.
    pub fn stream(self, body: Body) -> Response {
        Response { body, headers: self.headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Handlers return `Result<Response, ApiError>`; both sides implement this.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_LENGTH;
    use http_body_util::BodyExt;

    use super::*;

    #[tokio::test]
    async fn text_sets_content_type_and_body() {
        let resp = Response::text("pong\n").into_http();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], TEXT_PLAIN);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"pong\n");
    }

    #[tokio::test]
    async fn stream_keeps_the_declared_head() {
        let resp = Response::builder()
            .header(CONTENT_TYPE, HeaderValue::from_static("image/png;a.png"))
            .header(CONTENT_LENGTH, HeaderValue::from(5u64))
            .stream(body::full("hello"))
            .into_http();

        assert_eq!(resp.headers()[CONTENT_TYPE], "image/png;a.png");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "5");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"hello");
    }

    #[test]
    fn text_does_not_override_an_explicit_content_type() {
        let resp = Response::builder()
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .text("{}")
            .into_http();
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    }
}
