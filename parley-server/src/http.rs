//! HTTP API surface
//!
//! A thin axum layer over the same store the socket handlers use. Missing
//! or empty fields are 400; business failures (duplicate user, bad
//! password) are 200 with `{"status":"error"}`; storage failures are 500.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use parley_common::protocol::ServerResponse;
use parley_common::validators;

use crate::handlers::errors::{
    err_credentials_required, err_invalid_password, err_message_fields_required, err_storage,
    err_user_exists, err_user_not_found, msg_logged_in, msg_message_sent, msg_registered,
};
use crate::store::{AccountError, Store};

/// Body for /register and /login
///
/// Fields default to empty so an absent field takes the same 400 path as an
/// empty one.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body for /send
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub text: String,
}

/// Build the HTTP router over the shared store
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/send", post(send_message))
        .route("/messages", get(get_messages))
        .with_state(store)
}

/// POST /register
async fn register(
    State(store): State<Store>,
    Json(req): Json<CredentialsRequest>,
) -> (StatusCode, Json<ServerResponse>) {
    if validators::validate_username(&req.username).is_err()
        || validators::validate_password(&req.password).is_err()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ServerResponse::error(err_credentials_required())),
        );
    }

    match store.accounts.register(&req.username, &req.password).await {
        Ok(()) => (StatusCode::OK, Json(ServerResponse::ok(msg_registered()))),
        Err(AccountError::AlreadyExists) => (
            StatusCode::OK,
            Json(ServerResponse::error(err_user_exists())),
        ),
        Err(e) => storage_failure("register", &e),
    }
}

/// POST /login
async fn login(
    State(store): State<Store>,
    Json(req): Json<CredentialsRequest>,
) -> (StatusCode, Json<ServerResponse>) {
    if validators::validate_username(&req.username).is_err()
        || validators::validate_password(&req.password).is_err()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ServerResponse::error(err_credentials_required())),
        );
    }

    match store.accounts.login(&req.username, &req.password).await {
        Ok(()) => (StatusCode::OK, Json(ServerResponse::ok(msg_logged_in()))),
        Err(AccountError::InvalidPassword) => (
            StatusCode::OK,
            Json(ServerResponse::error(err_invalid_password())),
        ),
        Err(AccountError::UserNotFound) => (
            StatusCode::OK,
            Json(ServerResponse::error(err_user_not_found())),
        ),
        Err(e) => storage_failure("login", &e),
    }
}

/// POST /send
async fn send_message(
    State(store): State<Store>,
    Json(req): Json<SendRequest>,
) -> (StatusCode, Json<ServerResponse>) {
    if validators::validate_username(&req.username).is_err()
        || validators::validate_text(&req.text).is_err()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ServerResponse::error(err_message_fields_required())),
        );
    }

    match store.chat.append(&req.username, &req.text).await {
        Ok(_) => (StatusCode::OK, Json(ServerResponse::ok(msg_message_sent()))),
        Err(e) => storage_failure("send", &e),
    }
}

/// GET /messages
async fn get_messages(State(store): State<Store>) -> (StatusCode, Json<ServerResponse>) {
    match store.chat.all().await {
        Ok(messages) => (StatusCode::OK, Json(ServerResponse::history(messages))),
        Err(e) => storage_failure("messages", &e),
    }
}

/// Log a storage failure and build the 500 response
fn storage_failure(
    operation: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ServerResponse>) {
    eprintln!("Storage error during {}: {}", operation, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ServerResponse::error(err_storage())),
    )
}
