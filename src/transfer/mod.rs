//! Streaming primitives behind uploads and downloads.
//!
//! - [`sniff`] peeks at a seekable source to name its media type.
//! - [`copy_buffer`] / [`Transfer`] move bytes through a fixed buffer so
//!   memory stays flat no matter how large the file is.

mod copy;
mod sniff;

pub use copy::{CHUNK_SIZE, Transfer, copy_buffer};
pub use sniff::{SNIFF_LEN, detect_content_type, sniff};
