//! `POST /upload`: persist one multipart file field.

use std::io;

use futures_util::TryStreamExt;
use http_body_util::BodyExt;
use multer::Multipart;
use tokio_util::io::StreamReader;
use tracing::info;

use crate::error::ApiError;
use crate::request::Request;
use crate::response::Response;
use crate::store::Store;
use crate::transfer::Transfer;

/// Name of the form field carrying the file.
pub const FILE_FIELD: &str = "afile";

/// Streams the `afile` part of a multipart form into the store.
///
/// The entry is named exactly as the client's filename and replaces any
/// previous entry of that name. Memory use is one [`CHUNK_SIZE`](crate::transfer::CHUNK_SIZE)
/// buffer regardless of file size.
///
/// A form without an `afile` file part is answered with `500`, not `400`.
pub async fn upload(store: Store, req: Request) -> Result<Response, ApiError> {
    let boundary = req
        .header("content-type")
        .ok_or_else(|| ApiError::bad_request("request Content-Type isn't multipart/form-data"))
        .and_then(|ct| multer::parse_boundary(ct).map_err(ApiError::bad_request))?;

    let mut form = Multipart::new(req.into_body().into_data_stream(), boundary);

    let (name, field) = loop {
        let Some(field) = form.next_field().await.map_err(form_error)? else {
            return Err(ApiError::Internal(format!("no file in form field `{FILE_FIELD}`")));
        };
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if let Some(name) = field.file_name().map(str::to_owned) {
            break (name, field);
        }
    };

    let dst = store.create(&name).await.map_err(ApiError::internal)?;
    let src = StreamReader::new(field.map_err(io::Error::other));

    let (written, dst) = Transfer::new(src, dst).run().await.map_err(ApiError::internal)?;
    dst.sync_all().await.map_err(ApiError::internal)?;

    info!(file = %name, bytes = written, "uploaded");
    Ok(Response::text(format!("UPLOADED: File '{name}' with {written} bytes\n")))
}

/// Framing problems are the client's fault; failing to read the body is not.
fn form_error(err: multer::Error) -> ApiError {
    match err {
        multer::Error::StreamReadFailed(_) => ApiError::internal(err),
        _ => ApiError::bad_request(err),
    }
}
