//! Consumer module graph.
//!
//! Mirrors the style modules the host has loaded so a recompilation can
//! invalidate the right consumer. Keyed by the original consumer's id (the
//! style source file), not the virtual id.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// In-memory module graph with importer edges.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    inner: Arc<RwLock<GraphInner>>,
}

#[derive(Debug, Default)]
struct GraphInner {
    modules: HashMap<String, ModuleNode>,
}

#[derive(Debug, Default)]
struct ModuleNode {
    /// Modules importing this one; the host reloads these after invalidation
    importers: HashSet<String>,
    invalidated: bool,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loaded module (host calls this when the module is first
    /// evaluated).
    pub fn add_module(&self, id: impl Into<String>) {
        self.inner.write().modules.entry(id.into()).or_default();
    }

    /// Record an importer edge `importer -> id`, creating the module entry
    /// when absent.
    pub fn add_importer(&self, id: &str, importer: impl Into<String>) {
        self.inner
            .write()
            .modules
            .entry(id.to_string())
            .or_default()
            .importers
            .insert(importer.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().modules.contains_key(id)
    }

    /// Mark a module invalidated. Returns its importers when the module is
    /// currently loaded, `None` otherwise.
    pub fn invalidate(&self, id: &str) -> Option<Vec<String>> {
        let mut inner = self.inner.write();
        let node = inner.modules.get_mut(id)?;
        node.invalidated = true;
        Some(node.importers.iter().cloned().collect())
    }

    pub fn is_invalidated(&self, id: &str) -> bool {
        self.inner
            .read()
            .modules
            .get(id)
            .is_some_and(|n| n.invalidated)
    }

    /// Clear the invalidated flag once the host has reprocessed the module.
    pub fn revalidate(&self, id: &str) {
        if let Some(node) = self.inner.write().modules.get_mut(id) {
            node.invalidated = false;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_loaded_module() {
        let graph = ModuleGraph::new();
        graph.add_module("src/a.css.ts");
        graph.add_importer("src/a.css.ts", "src/App.tsx");

        let importers = graph.invalidate("src/a.css.ts").unwrap();
        assert_eq!(importers, vec!["src/App.tsx".to_string()]);
        assert!(graph.is_invalidated("src/a.css.ts"));
    }

    #[test]
    fn test_invalidate_unknown_module_is_none() {
        let graph = ModuleGraph::new();
        assert!(graph.invalidate("src/missing.css.ts").is_none());
    }

    #[test]
    fn test_revalidate() {
        let graph = ModuleGraph::new();
        graph.add_module("src/a.css.ts");
        graph.invalidate("src/a.css.ts");
        graph.revalidate("src/a.css.ts");
        assert!(!graph.is_invalidated("src/a.css.ts"));
    }

    #[test]
    fn test_importer_edges_deduplicate() {
        let graph = ModuleGraph::new();
        graph.add_importer("src/a.css.ts", "src/App.tsx");
        graph.add_importer("src/a.css.ts", "src/App.tsx");
        assert_eq!(graph.invalidate("src/a.css.ts").unwrap().len(), 1);
    }
}
