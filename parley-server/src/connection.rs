//! Client connection handling
//!
//! Each socket connection runs a read-dispatch-respond loop until the peer
//! disconnects or sends something structurally broken. An unknown action
//! gets an in-band error reply and the connection stays open; malformed
//! JSON or a missing required field closes the connection. Errors never
//! propagate past the handler task, so one bad client cannot take down the
//! server.

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use parley_common::framing::{DEFAULT_FRAME_TIMEOUT, LineReader, LineWriter};
use parley_common::io::send_response;
use parley_common::protocol::{ClientRequest, RequestError, ServerResponse, parse_request};

use crate::constants::*;
use crate::handlers::{self, HandlerContext, errors::err_unknown_action};
use crate::store::Store;

/// Parameters for handling a connection
pub struct ConnectionParams {
    pub peer_addr: SocketAddr,
    pub store: Store,
    pub debug: bool,
}

/// Handle a client connection
pub async fn handle_connection(socket: TcpStream, params: ConnectionParams) -> io::Result<()> {
    handle_connection_inner(socket, params).await
}

/// Inner connection handler that works with any AsyncRead + AsyncWrite stream
pub async fn handle_connection_inner<S>(socket: S, params: ConnectionParams) -> io::Result<()>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + 'static,
{
    let ConnectionParams {
        peer_addr,
        store,
        debug,
    } = params;

    if debug {
        println!("{}{}", MSG_CONNECTED, peer_addr);
    }

    let (reader, writer) = tokio::io::split(socket);
    let mut line_reader = LineReader::new(BufReader::new(reader));
    let mut line_writer = LineWriter::new(writer);

    loop {
        // Idle connections are allowed (the protocol is sessionless), but a
        // frame must complete within the timeout once its first byte arrives.
        let line = match line_reader.read_line_with_timeout(DEFAULT_FRAME_TIMEOUT).await {
            Ok(Some(line)) => line,
            Ok(None) => break, // Clean disconnect
            Err(e) => {
                if debug {
                    eprintln!("{}{}: {}", ERR_PARSE_REQUEST, peer_addr, e);
                }
                break;
            }
        };

        let request = match parse_request(&line) {
            Ok(request) => request,
            Err(RequestError::UnknownAction(action)) => {
                if debug {
                    eprintln!("Unknown action '{}' from {}", action, peer_addr);
                }
                if send_response(
                    &mut line_writer,
                    &ServerResponse::error(err_unknown_action()),
                )
                .await
                .is_err()
                {
                    break;
                }
                continue;
            }
            Err(e) => {
                // Malformed requests are connection-fatal
                eprintln!("{}{}: {}", ERR_PARSE_REQUEST, peer_addr, e);
                break;
            }
        };

        let mut ctx = HandlerContext {
            writer: &mut line_writer,
            peer_addr,
            store: &store,
            debug,
        };

        if let Err(e) = dispatch(request, &mut ctx).await {
            eprintln!("{}{}: {}", ERR_CONNECTION, peer_addr, e);
            break;
        }
    }

    // Shutdown the writer gracefully
    let _ = line_writer.get_mut().shutdown().await;

    if debug {
        println!("{}{}", MSG_DISCONNECTED, peer_addr);
    }

    Ok(())
}

/// Route a parsed request to its handler
async fn dispatch<W>(request: ClientRequest, ctx: &mut HandlerContext<'_, W>) -> io::Result<()>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    match request {
        ClientRequest::Register { username, password } => {
            handlers::handle_register(username, password, ctx).await
        }
        ClientRequest::Login { username, password } => {
            handlers::handle_login(username, password, ctx).await
        }
        ClientRequest::SendMessage { username, text } => {
            handlers::handle_send_message(username, text, ctx).await
        }
        ClientRequest::GetMessages => handlers::handle_get_messages(ctx).await,
    }
}
