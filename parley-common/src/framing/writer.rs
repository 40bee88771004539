//! Frame writer for sending newline-delimited messages to a stream

use tokio::io::AsyncWriteExt;

use super::error::FrameError;
use super::{MAX_LINE_LENGTH, TERMINATOR};

/// Writes newline-delimited frames to an async writer
pub struct LineWriter<W> {
    writer: W,
}

impl<W> LineWriter<W> {
    /// Create a new line writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the line writer and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: AsyncWriteExt + Unpin> LineWriter<W> {
    /// Write one frame: the payload bytes followed by the terminator
    ///
    /// # Errors
    ///
    /// Returns an error if the payload exceeds [`MAX_LINE_LENGTH`], contains
    /// a terminator byte (which would split the frame), or an I/O error
    /// occurs.
    pub async fn write_line(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        if payload.len() > MAX_LINE_LENGTH {
            return Err(FrameError::LineTooLong);
        }
        if payload.contains(&TERMINATOR) {
            return Err(FrameError::EmbeddedTerminator);
        }

        self.writer.write_all(payload).await?;
        self.writer.write_all(&[TERMINATOR]).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::LineReader;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn test_write_line() {
        let mut output = Vec::new();
        let mut writer = LineWriter::new(&mut output);

        writer.write_line(b"{\"status\":\"ok\"}").await.unwrap();
        assert_eq!(output, b"{\"status\":\"ok\"}\n");
    }

    #[tokio::test]
    async fn test_write_rejects_embedded_terminator() {
        let mut output = Vec::new();
        let mut writer = LineWriter::new(&mut output);

        let result = writer.write_line(b"two\nlines").await;
        assert!(matches!(result, Err(FrameError::EmbeddedTerminator)));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_write_rejects_oversized_payload() {
        let mut output = Vec::new();
        let mut writer = LineWriter::new(&mut output);

        let payload = vec![b'x'; MAX_LINE_LENGTH + 1];
        let result = writer.write_line(&payload).await;
        assert!(matches!(result, Err(FrameError::LineTooLong)));
    }

    #[tokio::test]
    async fn test_writer_reader_round_trip() {
        use tokio::io::duplex;

        let (client, server) = duplex(256);
        let mut writer = LineWriter::new(client);
        let mut reader = LineReader::new(BufReader::new(server));

        writer.write_line(b"first").await.unwrap();
        writer.write_line(b"second").await.unwrap();

        assert_eq!(reader.read_line().await.unwrap().unwrap(), b"first");
        assert_eq!(reader.read_line().await.unwrap().unwrap(), b"second");
    }
}
