//! Parley Chat Server

mod args;
mod connection;
mod constants;
mod handlers;
mod http;
mod store;

use std::future::IntoFuture;
use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;

use args::Args;
use connection::ConnectionParams;
use constants::*;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Print banner first
    println!("{}{}", MSG_BANNER, env!("CARGO_PKG_VERSION"));

    // Setup storage - both documents exist before anything accepts
    let store = match store::init_store(&args.data_dir).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}{}", ERR_STORAGE_INIT, e);
            std::process::exit(1);
        }
    };
    println!("{}{}", MSG_DATA_DIR, args.data_dir.display());

    // Setup network (HTTP listener + socket listener)
    let (http_listener, socket_listener) =
        setup_network(args.bind, args.port, args.socket_port).await;

    let router = http::create_router(store.clone());

    // Setup graceful shutdown handling
    let shutdown_signal = setup_shutdown_signal();

    let debug = args.debug;

    // Main server loops - serve HTTP and accept socket connections
    tokio::select! {
        _ = shutdown_signal => {
            println!("{}", MSG_SHUTDOWN_RECEIVED);
        }
        // HTTP API
        result = axum::serve(http_listener, router).into_future() => {
            if let Err(e) = result {
                eprintln!("{}{}", ERR_HTTP_SERVER, e);
            }
        }
        // Socket accept loop
        _ = async {
            loop {
                match socket_listener.accept().await {
                    Ok((socket, peer_addr)) => {
                        let params = ConnectionParams {
                            peer_addr,
                            store: store.clone(),
                            debug,
                        };

                        // Spawn a new task to handle this connection
                        tokio::spawn(async move {
                            if let Err(e) = connection::handle_connection(socket, params).await {
                                eprintln!("{}{}: {}", ERR_CONNECTION, peer_addr, e);
                            }
                        });
                    }
                    Err(e) => {
                        eprintln!("{}{}", ERR_ACCEPT, e);
                    }
                }
            }
        } => {}
    }
}

/// Setup network: bind the HTTP and socket listeners
async fn setup_network(
    bind: std::net::IpAddr,
    http_port: u16,
    socket_port: u16,
) -> (TcpListener, TcpListener) {
    let http_addr = SocketAddr::new(bind, http_port);
    let http_listener = match TcpListener::bind(http_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("{}{}: {}", ERR_BIND_FAILED, http_addr, e);
            std::process::exit(1);
        }
    };
    println!("{}{}", MSG_HTTP_LISTENING, http_addr);

    let socket_addr = SocketAddr::new(bind, socket_port);
    let socket_listener = match TcpListener::bind(socket_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("{}{}: {}", ERR_BIND_FAILED, socket_addr, e);
            std::process::exit(1);
        }
    };
    println!("{}{}", MSG_SOCKET_LISTENING, socket_addr);

    (http_listener, socket_listener)
}

/// Setup graceful shutdown signal handling (Ctrl+C)
async fn setup_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect(ERR_SIGNAL_SIGTERM);
        let mut sigint = signal(SignalKind::interrupt()).expect(ERR_SIGNAL_SIGINT);

        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect(ERR_SIGNAL_CTRLC);
    }
}
