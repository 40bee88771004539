//! Frame reader for parsing newline-delimited messages from a stream

use std::io;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::time::timeout;

use super::error::FrameError;
use super::{MAX_LINE_LENGTH, TERMINATOR};

/// Default timeout for completing a frame once the first byte is received
pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_secs(60);

/// Reads newline-delimited frames from an async reader
///
/// Callers should wrap the underlying stream in a `BufReader`; the reader
/// pulls single bytes and relies on the buffer for efficiency.
pub struct LineReader<R> {
    reader: R,
}

impl<R> LineReader<R> {
    /// Create a new line reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Get a mutable reference to the underlying reader
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume the line reader and return the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncReadExt + Unpin> LineReader<R> {
    /// Read the next frame from the stream
    ///
    /// Returns the frame's bytes without the terminator, or `Ok(None)` if
    /// the connection is cleanly closed before a frame starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame exceeds [`MAX_LINE_LENGTH`], the stream
    /// ends mid-frame, or an I/O error occurs.
    ///
    /// # Note
    ///
    /// This method has no timeout - it will wait indefinitely for data.
    /// For production use, prefer [`read_line_with_timeout`](Self::read_line_with_timeout).
    pub async fn read_line(&mut self) -> Result<Option<Vec<u8>>, FrameError> {
        let first_byte = match self.read_byte_allow_eof().await? {
            Some(b) => b,
            None => return Ok(None), // Clean disconnect
        };

        self.read_line_after_first_byte(first_byte).await.map(Some)
    }

    /// Read the next frame from the stream with a timeout
    ///
    /// Waits indefinitely for the first byte (the protocol is sessionless,
    /// so idle connections are allowed), but once a frame starts it must
    /// complete within `frame_timeout`.
    ///
    /// Returns `Ok(None)` if the connection is cleanly closed.
    pub async fn read_line_with_timeout(
        &mut self,
        frame_timeout: Duration,
    ) -> Result<Option<Vec<u8>>, FrameError> {
        let first_byte = match self.read_byte_allow_eof().await? {
            Some(b) => b,
            None => return Ok(None), // Clean disconnect
        };

        match timeout(frame_timeout, self.read_line_after_first_byte(first_byte)).await {
            Ok(result) => result.map(Some),
            Err(_) => Err(FrameError::FrameTimeout),
        }
    }

    /// Complete reading a frame after the first byte has been received
    async fn read_line_after_first_byte(&mut self, first_byte: u8) -> Result<Vec<u8>, FrameError> {
        if first_byte == TERMINATOR {
            return Ok(Vec::new());
        }

        let mut line = vec![first_byte];
        loop {
            let byte = self.read_byte().await?;
            if byte == TERMINATOR {
                return Ok(line);
            }
            if line.len() == MAX_LINE_LENGTH {
                return Err(FrameError::LineTooLong);
            }
            line.push(byte);
        }
    }

    /// Read a single byte, returning None on clean EOF
    async fn read_byte_allow_eof(&mut self) -> Result<Option<u8>, FrameError> {
        let mut buf = [0u8; 1];
        match self.reader.read_exact(&mut buf).await {
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a single byte
    async fn read_byte(&mut self) -> Result<u8, FrameError> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf).await?;
        Ok(buf[0])
    }
}
