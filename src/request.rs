//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use http_body_util::BodyExt;

use crate::body::{Body, BoxError};

/// An incoming HTTP request.
///
/// The body is never buffered by ferry. Handlers that want the whole
/// payload call [`Request::bytes`]; handlers that stream take it with
/// [`Request::into_body`].
pub struct Request {
    pub(crate) headers: HeaderMap,
    pub(crate) body: Body,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(headers: HeaderMap, body: Body, params: HashMap<String, String>) -> Self {
        Self { headers, body, params }
    }

    /// Header lookup. Values that are not visible ASCII read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/download/{filename}`, `req.param("filename")` on
    /// `/download/a%20b.zip` returns `Some("a%20b.zip")`: the segment is
    /// handed over exactly as it appeared in the URI.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Takes the body as a stream of frames.
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Reads the entire body into memory.
    pub async fn bytes(self) -> Result<Bytes, BoxError> {
        Ok(self.body.collect().await?.to_bytes())
    }
}
