//! get_messages command handler

use std::io;

use tokio::io::AsyncWrite;

use parley_common::protocol::ServerResponse;

use super::HandlerContext;

/// Handle a request for the full message history
///
/// Returns every stored message in chronological order; there is no
/// filtering, pagination, or limit.
pub async fn handle_get_messages<W>(ctx: &mut HandlerContext<'_, W>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match ctx.store.chat.all().await {
        Ok(messages) => ctx.send(&ServerResponse::history(messages)).await,
        Err(e) => {
            eprintln!(
                "Storage error during get_messages for {}: {}",
                ctx.peer_addr, e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::create_test_context;

    #[tokio::test]
    async fn test_get_messages_empty() {
        let mut test_ctx = create_test_context().await;

        handle_get_messages(&mut test_ctx.handler_context())
            .await
            .unwrap();

        let reply = test_ctx.read_reply().await;
        assert!(reply.is_ok());
        assert_eq!(reply.messages.unwrap().len(), 0);
        assert!(reply.message.is_none());
    }

    #[tokio::test]
    async fn test_get_messages_returns_history_in_order() {
        let mut test_ctx = create_test_context().await;
        test_ctx.store.chat.append("alice", "first").await.unwrap();
        test_ctx.store.chat.append("bob", "second").await.unwrap();

        handle_get_messages(&mut test_ctx.handler_context())
            .await
            .unwrap();

        let reply = test_ctx.read_reply().await;
        let messages = reply.messages.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "first");
        assert_eq!(messages[1].text, "second");
    }
}
