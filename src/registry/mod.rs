//! Virtual module registry.
//!
//! The source of truth for what CSS exists right now: a map from virtual
//! module id to the CSS text produced by the owning style file's most recent
//! successful compilation.

use dashmap::DashMap;

use crate::core::VirtualId;

/// In-memory `VirtualId -> CSS` store (thread-safe).
///
/// Entries are overwritten on every successful compilation and never
/// removed; the domain is bounded by the number of style files in the
/// project. Owned by the plugin instance, written by the pipeline, read by
/// the bridge and the broadcaster.
#[derive(Default)]
pub struct StyleRegistry {
    css: DashMap<VirtualId, String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self {
            css: DashMap::new(),
        }
    }

    pub fn has(&self, id: &VirtualId) -> bool {
        self.css.contains_key(id)
    }

    pub fn get(&self, id: &VirtualId) -> Option<String> {
        self.css.get(id).map(|r| r.value().clone())
    }

    pub fn set(&self, id: VirtualId, css: impl Into<String>) {
        self.css.insert(id, css.into());
    }

    pub fn len(&self) -> usize {
        self.css.len()
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }
}
