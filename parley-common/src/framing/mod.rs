//! Newline-delimited JSON framing
//!
//! Every protocol message occupies exactly one line: the JSON object's bytes
//! followed by a `\n` terminator. Explicit framing means message boundaries
//! never depend on how the bytes arrive, so pipelined requests and partial
//! reads behave correctly.

mod error;
mod reader;
mod writer;

pub use error::FrameError;
pub use reader::{DEFAULT_FRAME_TIMEOUT, LineReader};
pub use writer::LineWriter;

/// Byte that terminates every frame
pub const TERMINATOR: u8 = b'\n';

/// Maximum frame length in bytes, terminator excluded (64 KiB)
///
/// Bounds memory per connection; a client that streams more than this
/// without a terminator is disconnected.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;
