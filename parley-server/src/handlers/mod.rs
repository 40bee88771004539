//! Request handlers for client commands

pub mod errors;
mod get_messages;
mod login;
mod register;
mod send_message;

#[cfg(test)]
pub mod testing;

pub use get_messages::handle_get_messages;
pub use login::handle_login;
pub use register::handle_register;
pub use send_message::handle_send_message;

use std::io;
use std::net::SocketAddr;

use tokio::io::AsyncWrite;

use parley_common::framing::LineWriter;
use parley_common::io::send_response;
use parley_common::protocol::ServerResponse;

use crate::store::Store;

/// Context passed to all handlers with shared resources
pub struct HandlerContext<'a, W> {
    pub writer: &'a mut LineWriter<W>,
    pub peer_addr: SocketAddr,
    pub store: &'a Store,
    pub debug: bool,
}

impl<W> HandlerContext<'_, W>
where
    W: AsyncWrite + Unpin,
{
    /// Send a response to the client
    pub async fn send(&mut self, response: &ServerResponse) -> io::Result<()> {
        send_response(self.writer, response).await
    }
}
