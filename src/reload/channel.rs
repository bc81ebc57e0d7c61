//! WebSocket update channel.
//!
//! Fire-and-forget broadcast to connected dev clients; no acknowledgement or
//! delivery guarantee. Dead clients are pruned on send.

use std::net::{TcpListener, TcpStream};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tungstenite::WebSocket;
use tungstenite::protocol::Message;

use super::UpdateSink;
use super::message::HotUpdateMessage;

/// Maximum port retry attempts
const MAX_PORT_RETRIES: u16 = 10;

// =============================================================================
// Client Channel
// =============================================================================

/// Broadcast channel over the dev session's live WebSocket connections.
#[derive(Clone, Default)]
pub struct ClientChannel {
    clients: Arc<Mutex<Vec<WebSocket<TcpStream>>>>,
}

impl ClientChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly accepted client and greet it.
    fn add_client(&self, mut ws: WebSocket<TcpStream>) {
        let greeting = HotUpdateMessage::connected().to_json();
        if ws.send(Message::Text(greeting.into())).is_err() {
            crate::debug!("reload"; "client dropped during greeting");
            return;
        }
        self.clients.lock().push(ws);
    }

    pub fn client_count(&self) -> usize {
        self.clients.lock().len()
    }

    /// Broadcast a message to all connected clients, pruning dead ones
    pub fn broadcast(&self, msg: &HotUpdateMessage) {
        let text = msg.to_json();
        let mut clients = self.clients.lock();

        if clients.is_empty() {
            crate::debug!("reload"; "no clients connected");
            return;
        }

        let count = clients.len();
        clients.retain_mut(|client| match client.send(Message::Text(text.clone().into())) {
            Ok(_) => true,
            Err(e) => {
                crate::debug!("reload"; "client disconnected: {}", e);
                false
            }
        });
        crate::debug!("reload"; "broadcast to {} clients", count);
    }

    /// Close all client connections.
    pub fn shutdown(&self) {
        let mut clients = self.clients.lock();
        for mut client in clients.drain(..) {
            let _ = client.close(None);
        }
    }
}

impl UpdateSink for ClientChannel {
    fn send(&self, msg: &HotUpdateMessage) {
        self.broadcast(msg);
    }
}

// =============================================================================
// Channel Server
// =============================================================================

/// Start the update channel server, accepting clients on a background
/// thread.
///
/// Returns the channel and the actual bound port.
pub fn start_channel_server(base_port: u16) -> Result<(ClientChannel, u16)> {
    let (listener, actual_port) = try_bind_port(base_port, MAX_PORT_RETRIES)?;
    listener.set_nonblocking(true)?;

    let channel = ClientChannel::new();
    let accept_channel = channel.clone();

    // Spawn acceptor thread
    std::thread::spawn(move || {
        loop {
            match listener.accept() {
                Ok((stream, addr)) => {
                    crate::debug!("reload"; "client connected: {}", addr);

                    // Set blocking for WebSocket operations
                    let _ = stream.set_nonblocking(false);

                    match tungstenite::accept(stream) {
                        Ok(ws) => accept_channel.add_client(ws),
                        Err(e) => crate::log!("reload"; "handshake failed: {}", e),
                    }
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    std::thread::sleep(std::time::Duration::from_millis(100));
                    continue;
                }
                Err(e) => {
                    crate::log!("reload"; "accept error: {}", e);
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
        }
    });

    Ok((channel, actual_port))
}

// =============================================================================
// Helpers
// =============================================================================

/// Try binding to port, retry with incremented port if in use
fn try_bind_port(base_port: u16, max_retries: u16) -> Result<(TcpListener, u16)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        match TcpListener::bind(format!("127.0.0.1:{}", port)) {
            Ok(listener) => {
                let actual_port = listener.local_addr()?.port();
                return Ok((listener, actual_port));
            }
            Err(e) => {
                last_error = Some(e);
                continue;
            }
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind update channel server after {} attempts: {}",
        max_retries,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}
