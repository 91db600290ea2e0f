//! Chunked byte relay.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of the intermediate buffer used by every transfer.
///
/// Bounds per-request memory regardless of payload size while keeping the
/// number of read/write calls low.
pub const CHUNK_SIZE: usize = 32_000;

/// Copies every remaining byte of `src` into `dst` through `buf`.
///
/// Returns the number of bytes copied. A zero-length read ends the copy and
/// `dst` is flushed. The first read or write error aborts the copy; bytes
/// already written to `dst` stay written.
pub async fn copy_buffer<R, W>(src: &mut R, dst: &mut W, buf: &mut [u8]) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut copied = 0u64;
    loop {
        let n = src.read(buf).await?;
        if n == 0 {
            break;
        }
        dst.write_all(&buf[..n]).await?;
        copied += n as u64;
    }
    dst.flush().await?;
    Ok(copied)
}

/// One request's transfer: a source, a sink, and a buffer owned by nobody else.
///
/// Consumed by [`Transfer::run`], so the buffer can never be shared between
/// concurrent requests, and both handles are dropped (closed) when the copy
/// ends, whichever way it ends.
pub struct Transfer<R, W> {
    src: R,
    dst: W,
    buf: Box<[u8]>,
}

impl<R, W> Transfer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(src: R, dst: W) -> Self {
        Self { src, dst, buf: vec![0; CHUNK_SIZE].into_boxed_slice() }
    }

    /// Copies everything and hands the sink back so the caller can finish it
    /// (e.g. `sync_all` on a file) before reporting success.
    pub async fn run(mut self) -> std::io::Result<(u64, W)> {
        let n = copy_buffer(&mut self.src, &mut self.dst, &mut self.buf).await?;
        Ok((n, self.dst))
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::ReadBuf;

    use super::*;

    #[tokio::test]
    async fn zero_length_source_copies_nothing() {
        let mut src: &[u8] = &[];
        let mut dst = Vec::new();
        let mut buf = [0u8; 16];
        assert_eq!(copy_buffer(&mut src, &mut dst, &mut buf).await.unwrap(), 0);
        assert!(dst.is_empty());
    }

    #[tokio::test]
    async fn copies_across_many_chunks() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        let (n, out) = Transfer::new(&data[..], Vec::new()).run().await.unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(out, data);
    }

    #[tokio::test]
    async fn small_buffer_still_relays_everything() {
        let mut src: &[u8] = b"abcdefghij";
        let mut dst = Vec::new();
        let mut buf = [0u8; 3];
        let n = copy_buffer(&mut src, &mut dst, &mut buf).await.unwrap();
        assert_eq!(n, 10);
        assert_eq!(dst, b"abcdefghij");
    }

    /// Yields `good` and then fails.
    struct FailingReader {
        good: Option<&'static [u8]>,
    }

    impl AsyncRead for FailingReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            match self.good.take() {
                Some(bytes) => {
                    buf.put_slice(bytes);
                    Poll::Ready(Ok(()))
                }
                None => Poll::Ready(Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer gone"))),
            }
        }
    }

    #[tokio::test]
    async fn read_error_aborts_and_keeps_partial_write() {
        let mut src = FailingReader { good: Some(b"partial") };
        let mut dst = Vec::new();
        let mut buf = [0u8; 64];
        let err = copy_buffer(&mut src, &mut dst, &mut buf).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(dst, b"partial");
    }
}
