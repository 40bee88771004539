//! I/O utilities for sending and receiving protocol messages
//!
//! This module provides the interface between the protocol message types
//! ([`ClientRequest`], [`ServerResponse`]) and the wire format (framing).

use std::io;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::framing::{FrameError, LineReader, LineWriter};
use crate::protocol::{ClientRequest, ServerResponse};

// =============================================================================
// Error Conversion
// =============================================================================

impl From<FrameError> for io::Error {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Io(msg) => io::Error::other(msg),
            FrameError::ConnectionClosed => {
                io::Error::new(io::ErrorKind::ConnectionReset, "connection closed")
            }
            other => io::Error::other(other.to_string()),
        }
    }
}

// =============================================================================
// Message Sending
// =============================================================================

/// Send a [`ClientRequest`] to the server as one JSON line
pub async fn send_request<W>(
    writer: &mut LineWriter<W>,
    request: &ClientRequest,
) -> io::Result<()>
where
    W: AsyncWriteExt + Unpin,
{
    let payload = serde_json::to_vec(request)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_line(&payload).await.map_err(Into::into)
}

/// Send a [`ServerResponse`] to a client as one JSON line
pub async fn send_response<W>(
    writer: &mut LineWriter<W>,
    response: &ServerResponse,
) -> io::Result<()>
where
    W: AsyncWriteExt + Unpin,
{
    let payload = serde_json::to_vec(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writer.write_line(&payload).await.map_err(Into::into)
}

// =============================================================================
// Message Receiving
// =============================================================================

/// Read one [`ServerResponse`] line from the server
///
/// Returns `Ok(None)` if the connection closed cleanly before a response.
/// Used by clients and tests; the server reads raw lines directly so it can
/// keep its own error taxonomy for bad requests.
pub async fn read_response<R>(reader: &mut LineReader<R>) -> io::Result<Option<ServerResponse>>
where
    R: AsyncReadExt + Unpin,
{
    let line = match reader.read_line().await? {
        Some(line) => line,
        None => return Ok(None),
    };

    let response = serde_json::from_slice(&line)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{parse_request, Status};
    use tokio::io::{BufReader, duplex};

    #[tokio::test]
    async fn test_request_round_trip() {
        let (client, server) = duplex(256);
        let mut writer = LineWriter::new(client);
        let mut reader = LineReader::new(BufReader::new(server));

        let request = ClientRequest::SendMessage {
            username: "alice".to_string(),
            text: "hello".to_string(),
        };
        send_request(&mut writer, &request).await.unwrap();

        let line = reader.read_line().await.unwrap().unwrap();
        let parsed = parse_request(&line).unwrap();
        assert!(matches!(
            parsed,
            ClientRequest::SendMessage { username, text }
                if username == "alice" && text == "hello"
        ));
    }

    #[tokio::test]
    async fn test_response_round_trip() {
        let (client, server) = duplex(256);
        let mut writer = LineWriter::new(server);
        let mut reader = LineReader::new(BufReader::new(client));

        send_response(&mut writer, &ServerResponse::error("Неверный пароль."))
            .await
            .unwrap();

        let response = read_response(&mut reader).await.unwrap().unwrap();
        assert_eq!(response.status, Status::Error);
        assert_eq!(response.message.as_deref(), Some("Неверный пароль."));
    }

    #[tokio::test]
    async fn test_read_response_clean_disconnect() {
        let (client, server) = duplex(64);
        let mut reader = LineReader::new(BufReader::new(client));
        drop(server);

        let response = read_response(&mut reader).await.unwrap();
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_read_response_invalid_json() {
        let (client, server) = duplex(64);
        let mut writer = LineWriter::new(server);
        let mut reader = LineReader::new(BufReader::new(client));

        writer.write_line(b"not json").await.unwrap();

        let result = read_response(&mut reader).await;
        assert!(result.is_err());
    }
}
