//! `GET /download/{filename}`: stream a store entry back.

use std::io;

use futures_util::TryStreamExt;
use http::HeaderValue;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http_body_util::StreamBody;
use hyper::body::Frame;
use percent_encoding::percent_decode_str;
use tokio::fs::File;
use tokio::io::DuplexStream;
use tokio_util::io::ReaderStream;
use tracing::{Instrument, debug, info_span, warn};

use crate::body;
use crate::error::ApiError;
use crate::request::Request;
use crate::response::Response;
use crate::store::Store;
use crate::transfer::{self, CHUNK_SIZE, Transfer};

/// Opens the entry, sniffs it, and answers with its bytes.
///
/// The path segment is percent-decoded first, so `/download/my%20file.txt`
/// names the entry `my file.txt`; a segment that does not decode to UTF-8
/// is a `400`.
///
/// The response head carries `content-type: <sniffed>;<filename>` and the
/// size from file metadata. Both are fixed before any body byte exists: the
/// body is fed by a separate copy task through an in-memory pipe, and a
/// failure there can only truncate the stream.
pub async fn download(store: Store, req: Request) -> Result<Response, ApiError> {
    let raw = req.param("filename").unwrap_or_default();
    let name = percent_decode_str(raw)
        .decode_utf8()
        .map_err(ApiError::bad_request)?
        .into_owned();

    let mut file = store.open(&name).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ApiError::NotFound(e.to_string()),
        _ => ApiError::internal(e),
    })?;

    let sniffed = transfer::sniff(&mut file).await.map_err(ApiError::internal)?;
    let size = file.metadata().await.map_err(ApiError::internal)?.len();

    let content_type =
        HeaderValue::from_str(&format!("{sniffed};{name}")).map_err(ApiError::internal)?;

    let (pipe, reader) = tokio::io::duplex(CHUNK_SIZE);
    let span = info_span!("download", file = %name, size);
    tokio::spawn(pump(file, pipe).instrument(span));

    let stream = ReaderStream::with_capacity(reader, CHUNK_SIZE).map_ok(Frame::data);
    Ok(Response::builder()
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, HeaderValue::from(size))
        .stream(body::boxed(StreamBody::new(stream))))
}

/// Copies the file into the response pipe. Runs after the head is built.
async fn pump(file: File, pipe: DuplexStream) {
    match Transfer::new(file, pipe).run().await {
        Ok((sent, _)) => debug!(bytes = sent, "download streamed"),
        // The status line is already out; all we can do is log.
        Err(e) => warn!("download aborted: {e}"),
    }
}
