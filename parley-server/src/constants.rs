//! Server log message constants

pub const MSG_BANNER: &str = "Parley chat server v";
pub const MSG_DATA_DIR: &str = "Storage directory: ";
pub const MSG_HTTP_LISTENING: &str = "HTTP API listening on http://";
pub const MSG_SOCKET_LISTENING: &str = "Socket server listening on ";
pub const MSG_SHUTDOWN_RECEIVED: &str = "Shutdown signal received, exiting";
pub const MSG_CONNECTED: &str = "Client connected: ";
pub const MSG_DISCONNECTED: &str = "Client disconnected: ";

pub const ERR_STORAGE_INIT: &str = "Failed to initialize storage: ";
pub const ERR_BIND_FAILED: &str = "Failed to bind to ";
pub const ERR_ACCEPT: &str = "Failed to accept connection: ";
pub const ERR_CONNECTION: &str = "Connection error from ";
pub const ERR_HTTP_SERVER: &str = "HTTP server error: ";
pub const ERR_PARSE_REQUEST: &str = "Failed to parse request from ";

pub const ERR_SIGNAL_SIGTERM: &str = "Failed to install SIGTERM handler";
pub const ERR_SIGNAL_SIGINT: &str = "Failed to install SIGINT handler";
pub const ERR_SIGNAL_CTRLC: &str = "Failed to install Ctrl+C handler";
