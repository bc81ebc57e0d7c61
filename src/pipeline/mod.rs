//! Style transform pipeline.
//!
//! Orchestrates a style file's journey from source to registered virtual
//! CSS module: compile, post-process, detect change, publish, register, and
//! hand the host a synthetic import that replaces the original module body.

pub mod scope;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::compile::{CompileRequest, CssPostProcessor, StyleCompiler};
use crate::config::ResolvedConfig;
use crate::core::{Mode, VirtualId, WatchMode, is_style_file, strip_query};
use crate::registry::StyleRegistry;

/// Result of a transform: replacement module source plus the files the host
/// must watch to retrigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    pub watch_files: Vec<PathBuf>,
}

impl TransformOutput {
    fn code_only(code: String) -> Self {
        Self {
            code,
            watch_files: Vec::new(),
        }
    }
}

// =============================================================================
// Transform Pipeline
// =============================================================================

/// The compilation pipeline. Holds the opaque compiler and the optional
/// post-processor capability, both injected at construction.
pub struct TransformPipeline<C, P> {
    compiler: C,
    post_processor: Option<P>,
}

impl<C: StyleCompiler, P: CssPostProcessor> TransformPipeline<C, P> {
    pub fn new(compiler: C) -> Self {
        Self {
            compiler,
            post_processor: None,
        }
    }

    pub fn with_post_processor(compiler: C, post_processor: P) -> Self {
        Self {
            compiler,
            post_processor: Some(post_processor),
        }
    }

    /// Transform a style module.
    ///
    /// Returns `Ok(None)` for ids outside the style-file naming convention.
    /// Compiler and post-processor errors propagate unmodified; the registry
    /// is left untouched on failure.
    pub async fn transform(
        &self,
        code: &str,
        id: &str,
        ssr: bool,
        config: &ResolvedConfig,
        registry: &StyleRegistry,
        mode: &Mode,
    ) -> Result<Option<TransformOutput>> {
        if !is_style_file(id) {
            return Ok(None);
        }
        let valid_id = strip_query(id);

        // Server-render branch: scope rewrite only, no CSS extraction, no
        // registry interaction, no watch files.
        if ssr {
            let scope_path = config.package.scope_path(Path::new(valid_id));
            let rewritten = scope::rewrite(code, &scope_path, &config.package.name);
            return Ok(Some(TransformOutput::code_only(rewritten)));
        }

        let output = self
            .compiler
            .compile(CompileRequest {
                file_path: Path::new(valid_id),
                cwd: &config.root,
            })
            .await?;

        let watch_files = filter_watch_files(output.watch_files, valid_id, config.watch_mode());

        // Virtual id derives from the requesting id, not the resolved path
        let virtual_id = VirtualId::from_file_id(id);

        let mut css = output.source;
        if let Some(post) = &self.post_processor {
            css = post.process(&css).await?;
        }

        // Compare before overwriting: the first registration never
        // broadcasts, later differing ones do.
        if let Mode::Dev(session) = mode
            && let Some(previous) = registry.get(&virtual_id)
            && previous != css
        {
            session.publish_style_update(valid_id, &virtual_id, &css);
        }
        registry.set(virtual_id.clone(), css);

        crate::debug!("transform"; "registered {}", virtual_id);

        Ok(Some(TransformOutput {
            code: format!("import \"{}\";", virtual_id.as_str()),
            watch_files,
        }))
    }
}

/// Watch-file registration policy: an incremental serve session excludes the
/// file itself; a full rebuild with watch keeps every compiler-reported
/// file.
fn filter_watch_files(files: Vec<PathBuf>, valid_id: &str, watch_mode: WatchMode) -> Vec<PathBuf> {
    match watch_mode {
        WatchMode::FullRebuild => files,
        WatchMode::Serve => files
            .into_iter()
            .filter(|f| f != Path::new(valid_id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_mode_excludes_self_watch() {
        let files = vec![
            PathBuf::from("src/a.css.ts"),
            PathBuf::from("src/theme.css.ts"),
        ];
        let kept = filter_watch_files(files, "src/a.css.ts", WatchMode::Serve);
        assert_eq!(kept, vec![PathBuf::from("src/theme.css.ts")]);
    }

    #[test]
    fn test_full_rebuild_keeps_every_file() {
        let files = vec![
            PathBuf::from("src/a.css.ts"),
            PathBuf::from("src/theme.css.ts"),
        ];
        let kept = filter_watch_files(files.clone(), "src/a.css.ts", WatchMode::FullRebuild);
        assert_eq!(kept, files);
    }
}
