#![allow(dead_code)]

use bytes::Bytes;
use ferry::{Response, Router, Store, routes};
use http_body_util::{BodyExt, Full};
use tempfile::TempDir;

pub const BOUNDARY: &str = "ferry-test-boundary";

/// A router over a fresh temporary store. Keep the `TempDir` alive.
pub fn app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    (routes::app(Store::new(dir.path())), dir)
}

/// One form part: `(field name, optional filename, content)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(f) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> http::Request<Full<Bytes>> {
    http::Request::post("/upload")
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Full::new(Bytes::from(multipart_body(parts))))
        .unwrap()
}

pub fn upload_file(name: &str, data: &[u8]) -> http::Request<Full<Bytes>> {
    upload_request(&[("afile", Some(name), data)])
}

pub fn get(path: &str) -> http::Request<Full<Bytes>> {
    http::Request::get(path).body(Full::new(Bytes::new())).unwrap()
}

pub fn post_json(path: &str, json: &str) -> http::Request<Full<Bytes>> {
    http::Request::post(path)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::copy_from_slice(json.as_bytes())))
        .unwrap()
}

/// Status, headers, and the full body of a response.
pub async fn read(resp: Response) -> (u16, http::HeaderMap, Bytes) {
    let resp = resp.into_http();
    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = resp.into_body().collect().await.expect("body").to_bytes();
    (status, headers, body)
}
