//! register command handler

use std::io;

use tokio::io::AsyncWrite;

use parley_common::protocol::ServerResponse;
use parley_common::validators;

use super::HandlerContext;
use super::errors::{err_credentials_required, err_user_exists, msg_registered};
use crate::store::AccountError;

/// Handle an account registration request
pub async fn handle_register<W>(
    username: String,
    password: String,
    ctx: &mut HandlerContext<'_, W>,
) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if validators::validate_username(&username).is_err()
        || validators::validate_password(&password).is_err()
    {
        return ctx
            .send(&ServerResponse::error(err_credentials_required()))
            .await;
    }

    match ctx.store.accounts.register(&username, &password).await {
        Ok(()) => ctx.send(&ServerResponse::ok(msg_registered())).await,
        Err(AccountError::AlreadyExists) => {
            ctx.send(&ServerResponse::error(err_user_exists())).await
        }
        Err(e) => {
            eprintln!("Storage error during register for {}: {}", ctx.peer_addr, e);
            Err(io::Error::other(e.to_string()))
        }
    }
}
