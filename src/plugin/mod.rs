//! Host-facing plugin surface.
//!
//! Implements the build tool's plugin lifecycle hooks: `configResolved`,
//! `configureServer`, `resolveId`, `load`, `transform`. The host invokes
//! hooks sequentially in its own task loop; the plugin performs no internal
//! parallelism.

use anyhow::Result;

use crate::bridge::ModuleBridge;
use crate::compile::{CssPostProcessor, LightningProcessor, StyleCompiler};
use crate::config::{ConfigError, HostConfig, ResolvedConfig};
use crate::core::Mode;
use crate::pipeline::{TransformOutput, TransformPipeline};
use crate::registry::StyleRegistry;
use crate::reload::DevSession;

/// Bundler plugin bridging compiled style modules into the host's module
/// graph.
///
/// Owns the registry and the emission mode; each instance is fully isolated,
/// so tests (and hosts embedding several projects) can run plugins side by
/// side.
pub struct StylePlugin<C, P = LightningProcessor> {
    pipeline: TransformPipeline<C, P>,
    registry: StyleRegistry,
    config: Option<ResolvedConfig>,
    mode: Mode,
}

impl<C: StyleCompiler> StylePlugin<C> {
    /// Plugin without a post-processor; compiled CSS is registered as-is.
    pub fn new(compiler: C) -> Self {
        Self {
            pipeline: TransformPipeline::new(compiler),
            registry: StyleRegistry::new(),
            config: None,
            mode: Mode::Static,
        }
    }
}

impl<C: StyleCompiler, P: CssPostProcessor> StylePlugin<C, P> {
    /// Plugin with a post-processing capability applied to every
    /// compilation.
    pub fn with_post_processor(compiler: C, post_processor: P) -> Self {
        Self {
            pipeline: TransformPipeline::with_post_processor(compiler, post_processor),
            registry: StyleRegistry::new(),
            config: None,
            mode: Mode::Static,
        }
    }

    /// `configResolved` hook: the host's final configuration arrives.
    ///
    /// Package context is resolved here; a project without an identifiable
    /// owning package fails fast instead of failing on every transform.
    pub fn config_resolved(&mut self, host: HostConfig) -> Result<(), ConfigError> {
        let resolved = ResolvedConfig::resolve(host)?;
        crate::debug!("config"; "resolved package `{}` at {}", resolved.package.name, resolved.package.dir.display());
        self.config = Some(resolved);
        Ok(())
    }

    /// `configureServer` hook: a dev session starts; emission switches to
    /// injection shims and change broadcasts.
    pub fn configure_server(&mut self, session: DevSession) {
        self.mode = Mode::Dev(session);
    }

    /// Tear down the dev session (dev server stopped).
    pub fn close_server(&mut self) {
        self.mode = Mode::Static;
    }

    /// `resolveId` hook: claim registered virtual ids, defer the rest.
    pub fn resolve_id(&self, id: &str) -> Option<String> {
        ModuleBridge::new(&self.registry, &self.mode).resolve_id(id)
    }

    /// `load` hook: raw CSS in static builds, injection shim in dev
    /// sessions, `None` for unregistered ids.
    pub fn load(&self, id: &str) -> Option<String> {
        ModuleBridge::new(&self.registry, &self.mode).load(id)
    }

    /// `transform` hook.
    ///
    /// Returns `Ok(None)` for non-style ids. Style ids either produce a
    /// synthetic import (client) or a scope-rewritten source (SSR); failures
    /// propagate unmodified and leave the registry untouched.
    pub async fn transform(
        &self,
        code: &str,
        id: &str,
        ssr: bool,
    ) -> Result<Option<TransformOutput>> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("transform invoked before configResolved"))?;
        self.pipeline
            .transform(code, id, ssr, config, &self.registry, &self.mode)
            .await
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn session(&self) -> Option<&DevSession> {
        self.mode.session()
    }
}

// =============================================================================
// Tests
// =============================================================================
