//! Body type shared by requests and responses.

use bytes::Bytes;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full};

/// Boxed error carried by body streams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A type-erased HTTP body.
///
/// hyper's `Incoming`, in-memory `Full` bodies built by tests, and the
/// streamed download pipe all end up as this one type.
pub type Body = UnsyncBoxBody<Bytes, BoxError>;

/// Erases any `http_body::Body` producing `Bytes`.
pub fn boxed<B>(body: B) -> Body
where
    B: hyper::body::Body<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    body.map_err(Into::into).boxed_unsync()
}

pub(crate) fn full(bytes: impl Into<Bytes>) -> Body {
    Full::new(bytes.into()).map_err(|never| match never {}).boxed_unsync()
}

pub(crate) fn empty() -> Body {
    Empty::<Bytes>::new().map_err(|never| match never {}).boxed_unsync()
}
