//! login command handler

use std::io;

use tokio::io::AsyncWrite;

use parley_common::protocol::ServerResponse;
use parley_common::validators;

use super::HandlerContext;
use super::errors::{
    err_credentials_required, err_invalid_password, err_user_not_found, msg_logged_in,
};
use crate::store::AccountError;

/// Handle a login request
///
/// A stateless credential check; the connection carries no session state.
pub async fn handle_login<W>(
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

    match ctx.store.accounts.login(&username, &password).await {
        Ok(()) => ctx.send(&ServerResponse::ok(msg_logged_in())).await,
        Err(AccountError::InvalidPassword) => {
            ctx.send(&ServerResponse::error(err_invalid_password())).await
        }
        Err(AccountError::UserNotFound) => {
            ctx.send(&ServerResponse::error(err_user_not_found())).await
        }
        Err(e) => {
            eprintln!("Storage error during login for {}: {}", ctx.peer_addr, e);
            Err(io::Error::other(e.to_string()))
        }
    }
}
