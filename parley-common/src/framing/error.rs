//! Framing error type

use std::fmt;
use std::io;

use super::MAX_LINE_LENGTH;

/// Errors produced while reading or writing frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Frame exceeded [`MAX_LINE_LENGTH`] before a terminator arrived
    LineTooLong,
    /// Outgoing payload contained a terminator byte
    EmbeddedTerminator,
    /// The stream ended in the middle of a frame
    ConnectionClosed,
    /// Frame did not complete within the frame timeout
    FrameTimeout,
    /// Underlying I/O error
    Io(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::LineTooLong => {
                write!(f, "frame exceeds maximum length of {} bytes", MAX_LINE_LENGTH)
            }
            FrameError::EmbeddedTerminator => write!(f, "payload contains a terminator byte"),
            FrameError::ConnectionClosed => write!(f, "connection closed mid-frame"),
            FrameError::FrameTimeout => write!(f, "frame did not complete within timeout"),
            FrameError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<io::Error> for FrameError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => FrameError::ConnectionClosed,
            _ => FrameError::Io(err.to_string()),
        }
    }
}
