//! Live reload for development sessions.
//!
//! A dev session pairs a client update channel with a mirror of the host's
//! consumer module graph. When a style module's CSS changes, the consumer is
//! invalidated and the new CSS is pushed on a per-module event channel, so
//! already-loaded pages restyle without a full reload.
//!
//! # Modules
//!
//! - `channel` - WebSocket broadcast channel and its acceptor server
//! - `graph` - consumer module graph with invalidation
//! - `message` - hot update message types (custom, connected, full-reload)

pub mod channel;
pub mod graph;
pub mod message;

pub use channel::{ClientChannel, start_channel_server};
pub use graph::ModuleGraph;
pub use message::HotUpdateMessage;

use std::sync::Arc;

use crate::core::VirtualId;

/// Outbound half of the dev session's live connection.
///
/// Fire-and-forget; delivery is not acknowledged.
pub trait UpdateSink: Send + Sync {
    fn send(&self, msg: &HotUpdateMessage);
}

// =============================================================================
// Dev Session
// =============================================================================

/// An active development session: created when the dev server starts, torn
/// down when it stops.
#[derive(Clone)]
pub struct DevSession {
    sink: Arc<dyn UpdateSink>,
    graph: ModuleGraph,
}

impl DevSession {
    pub fn new(sink: Arc<dyn UpdateSink>, graph: ModuleGraph) -> Self {
        Self { sink, graph }
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    /// Publish a style update: invalidate the consumer module (when loaded)
    /// and push the new CSS on the module's update channel.
    ///
    /// Both steps are best-effort. A consumer that is not currently loaded
    /// is skipped silently; the push happens unconditionally.
    pub fn publish_style_update(&self, consumer_id: &str, virtual_id: &VirtualId, css: &str) {
        match self.graph.invalidate(consumer_id) {
            Some(importers) => {
                crate::debug!("reload"; "invalidated {} ({} importers)", consumer_id, importers.len());
            }
            None => {
                crate::debug!("reload"; "consumer not loaded: {}", consumer_id);
            }
        }
        self.sink
            .send(&HotUpdateMessage::style_update(virtual_id.update_event(), css));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_publish_invalidates_loaded_consumer_and_pushes() {
        let sink = RecordingSink::new();
        let graph = ModuleGraph::new();
        graph.add_module("src/a.css.ts");

        let session = DevSession::new(Arc::new(sink.clone()), graph.clone());
        let vid = VirtualId::from_file_id("src/a.css.ts");
        session.publish_style_update("src/a.css.ts", &vid, ".x{color:blue}");

        assert!(graph.is_invalidated("src/a.css.ts"));
        assert_eq!(
            sink.messages(),
            vec![HotUpdateMessage::style_update(
                "vanilla-extract-style-update:src/a.css",
                ".x{color:blue}"
            )]
        );
    }

    #[test]
    fn test_publish_still_pushes_when_consumer_not_loaded() {
        let sink = RecordingSink::new();
        let session = DevSession::new(Arc::new(sink.clone()), ModuleGraph::new());

        let vid = VirtualId::from_file_id("src/a.css.ts");
        session.publish_style_update("src/a.css.ts", &vid, ".x{}");

        assert_eq!(sink.messages().len(), 1);
    }
}
