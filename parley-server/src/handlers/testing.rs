//! Shared helpers for handler tests

use std::net::SocketAddr;

use tokio::io::{BufReader, DuplexStream, duplex};

use parley_common::framing::{LineReader, LineWriter};
use parley_common::io::read_response;
use parley_common::protocol::ServerResponse;

use super::HandlerContext;
use crate::store::{Store, init_store};

/// Test fixture: a store over a temp directory plus an in-memory client pipe
pub struct TestContext {
    pub store: Store,
    pub client: LineReader<BufReader<DuplexStream>>,
    pub writer: LineWriter<DuplexStream>,
    pub peer_addr: SocketAddr,
    _dir: tempfile::TempDir,
}

/// Create a test context with fresh storage and a duplex connection
pub async fn create_test_context() -> TestContext {
    let dir = tempfile::tempdir().unwrap();
    let store = init_store(dir.path()).await.unwrap();

    let (client, server) = duplex(64 * 1024);

    TestContext {
        store,
        client: LineReader::new(BufReader::new(client)),
        writer: LineWriter::new(server),
        peer_addr: "127.0.0.1:9999".parse().unwrap(),
        _dir: dir,
    }
}

impl TestContext {
    /// Build a handler context borrowing this fixture's writer and store
    pub fn handler_context(&mut self) -> HandlerContext<'_, DuplexStream> {
        HandlerContext {
            writer: &mut self.writer,
            peer_addr: self.peer_addr,
            store: &self.store,
            debug: false,
        }
    }

    /// Read the next response the handler wrote to the client side
    pub async fn read_reply(&mut self) -> ServerResponse {
        read_response(&mut self.client)
            .await
            .expect("response should parse")
            .expect("a response should be present")
    }
}
