//! Module resolution and loading for virtual CSS modules.
//!
//! Answers the host's "can you resolve/load this id" queries from the
//! registry. Static builds get the stored CSS verbatim; dev sessions get an
//! injection shim subscribed to the module's update channel.

pub mod shim;

use crate::core::{Mode, VirtualId};
use crate::registry::StyleRegistry;

/// Resolution/load bridge over a registry and the current emission mode.
pub struct ModuleBridge<'a> {
    registry: &'a StyleRegistry,
    mode: &'a Mode,
}

impl<'a> ModuleBridge<'a> {
    pub fn new(registry: &'a StyleRegistry, mode: &'a Mode) -> Self {
        Self { registry, mode }
    }

    /// Claim ids the registry knows; anything else defers to the host's
    /// default resolution.
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        self.registry
            .has(&VirtualId::from_raw(id))
            .then(|| id.to_string())
    }

    /// Produce the module body for a registered virtual id, or `None` when
    /// the id is not registered.
    pub fn load(&self, id: &str) -> Option<String> {
        let virtual_id = VirtualId::from_raw(id);
        let css = self.registry.get(&virtual_id)?;
        Some(match self.mode {
            Mode::Static => css,
            Mode::Dev(_) => shim::render(&virtual_id, &css),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reload::testing::RecordingSink;
    use crate::reload::{DevSession, ModuleGraph};
    use std::sync::Arc;

    fn registry_with_entry() -> StyleRegistry {
        let registry = StyleRegistry::new();
        registry.set(VirtualId::from_file_id("a.css.ts"), ".x{color:red}");
        registry
    }

    #[test]
    fn test_resolve_registered_id() {
        let registry = registry_with_entry();
        let bridge = ModuleBridge::new(&registry, &Mode::Static);
        assert_eq!(bridge.resolve_id("a.css").as_deref(), Some("a.css"));
    }

    #[test]
    fn test_resolve_unknown_id_defers() {
        let registry = registry_with_entry();
        let bridge = ModuleBridge::new(&registry, &Mode::Static);
        assert_eq!(bridge.resolve_id("other.css"), None);
    }

    #[test]
    fn test_static_load_returns_raw_css() {
        let registry = registry_with_entry();
        let bridge = ModuleBridge::new(&registry, &Mode::Static);
        assert_eq!(bridge.load("a.css").as_deref(), Some(".x{color:red}"));
    }

    #[test]
    fn test_dev_load_returns_injection_shim() {
        let registry = registry_with_entry();
        let mode = Mode::Dev(DevSession::new(
            Arc::new(RecordingSink::new()),
            ModuleGraph::new(),
        ));
        let bridge = ModuleBridge::new(&registry, &mode);

        let body = bridge.load("a.css").unwrap();
        assert!(body.contains("injectStyles"));
        assert!(body.contains("vanilla-extract-style-update:a.css"));
        assert!(body.contains(r#"inject(".x{color:red}");"#));
    }

    #[test]
    fn test_load_unknown_id_is_none() {
        let registry = registry_with_entry();
        let bridge = ModuleBridge::new(&registry, &Mode::Static);
        assert_eq!(bridge.load("missing.css"), None);
    }
}
