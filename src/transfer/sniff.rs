//! Content sniffing.
//!
//! Classifies a byte source from its first [`SNIFF_LEN`] bytes in layers:
//! WHATWG markup signatures, byte order marks, then `infer`'s binary
//! magic-number matchers, then a text-versus-binary fallback. The result is
//! always a usable MIME type string.

use std::io::SeekFrom;

use infer::MatcherType;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt};

/// Maximum number of bytes inspected.
pub const SNIFF_LEN: usize = 512;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const OCTET_STREAM: &str = "application/octet-stream";

/// Sniffs the source's media type and puts the read position back.
///
/// Reads up to [`SNIFF_LEN`] bytes from the current position; a short
/// read at end of stream is classified as-is. On `Ok` the position is
/// exactly where it was on entry. On `Err` the position is unspecified and
/// the source should not be read further.
pub async fn sniff<R>(src: &mut R) -> std::io::Result<&'static str>
where
    R: AsyncRead + AsyncSeek + Unpin + ?Sized,
{
    let offset = src.stream_position().await?;

    let mut sample = Vec::with_capacity(SNIFF_LEN);
    (&mut *src).take(SNIFF_LEN as u64).read_to_end(&mut sample).await?;

    let content_type = detect_content_type(&sample);
    src.seek(SeekFrom::Start(offset)).await?;
    Ok(content_type)
}

/// Classifies a sample. Only the first [`SNIFF_LEN`] bytes are considered.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    let first_non_ws = data.iter().position(|b| !is_ws(*b)).unwrap_or(data.len());
    let trimmed = &data[first_non_ws..];

    if let Some(ct) = sniff_markup(trimmed) {
        return ct;
    }
    if let Some(ct) = sniff_bom(data) {
        return ct;
    }
    if let Some(ct) = sniff_binary(data) {
        return ct;
    }
    if data.iter().any(|b| is_binary(*b)) {
        OCTET_STREAM
    } else {
        TEXT_PLAIN
    }
}

// ── Markup ────────────────────────────────────────────────────────────────────

/// Tags recognised as HTML. Matched case-insensitively and must be followed
/// by a space or `>`.
const HTML_TAGS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

fn sniff_markup(data: &[u8]) -> Option<&'static str> {
    let html = HTML_TAGS.iter().any(|tag| {
        data.len() > tag.len()
            && data[..tag.len()].eq_ignore_ascii_case(tag)
            && matches!(data[tag.len()], b' ' | b'>')
    });
    if html {
        return Some("text/html; charset=utf-8");
    }
    if data.starts_with(b"<?xml") {
        return Some("text/xml; charset=utf-8");
    }
    None
}

// ── Byte order marks ──────────────────────────────────────────────────────────

const BOMS: &[(&[u8], &str)] = &[
    (b"\xFE\xFF", "text/plain; charset=utf-16be"),
    (b"\xFF\xFE", "text/plain; charset=utf-16le"),
    (b"\xEF\xBB\xBF", TEXT_PLAIN),
];

fn sniff_bom(data: &[u8]) -> Option<&'static str> {
    BOMS.iter()
        .find(|(bom, _)| data.starts_with(bom))
        .map(|(_, ct)| *ct)
}

// ── Magic numbers ─────────────────────────────────────────────────────────────

/// Binary formats recognised by `infer`. Its text matchers are skipped:
/// markup has its own layer above and anything else textual falls through
/// to `text/plain`.
fn sniff_binary(data: &[u8]) -> Option<&'static str> {
    let kind = infer::get(data).filter(|k| !matches!(k.matcher_type(), MatcherType::Text))?;
    Some(web_name(kind.extension()).unwrap_or(kind.mime_type()))
}

/// Names browsers and Go's `http.DetectContentType` use where `infer`
/// reports a different one.
fn web_name(extension: &str) -> Option<&'static str> {
    let name = match extension {
        "gz" => "application/x-gzip",
        "rar" => "application/x-rar-compressed",
        "ico" => "image/x-icon",
        "aif" | "aiff" => "audio/aiff",
        "wav" => "audio/wave",
        "avi" => "video/avi",
        "ogg" | "oga" | "ogv" | "ogx" | "opus" | "spx" => "application/ogg",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        _ => return None,
    };
    Some(name)
}

fn is_ws(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

fn is_binary(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
