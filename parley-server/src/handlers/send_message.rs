//! send_message command handler

use std::io;

use tokio::io::AsyncWrite;

use parley_common::protocol::ServerResponse;
use parley_common::validators;

use super::HandlerContext;
use super::errors::{err_message_fields_required, msg_message_sent};

/// Handle a request to append a chat message
pub async fn handle_send_message<W>(
    username: String,
    text: String,
    ctx: &mut HandlerContext<'_, W>,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if validators::validate_username(&username).is_err()
        || validators::validate_text(&text).is_err()
    {
        return ctx
            .send(&ServerResponse::error(err_message_fields_required()))
            .await;
    }

    match ctx.store.chat.append(&username, &text).await {
        Ok(_) => ctx.send(&ServerResponse::ok(msg_message_sent())).await,
        Err(e) => {
            eprintln!(
                "Storage error during send_message for {}: {}",
                ctx.peer_addr, e
            );
            Err(e)
        }
    }
}
