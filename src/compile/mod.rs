//! Opaque compilation collaborators.
//!
//! The style-to-CSS compiler and the CSS post-processing chain are external
//! capabilities injected by the host; the pipeline only sees these traits.
//! Errors cross the boundary unmodified.

mod postprocess;

pub use postprocess::{CssPostProcessor, LightningProcessor};

use std::path::{Path, PathBuf};

use anyhow::Result;

/// A single compile invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    /// Filesystem path of the style source file (query suffix already
    /// stripped).
    pub file_path: &'a Path,
    /// Working directory for module resolution inside the compiler.
    pub cwd: &'a Path,
}

/// Compiler output: runtime CSS plus the files whose edits must retrigger
/// the transform. Transient; not retained beyond the transform call.
#[derive(Debug, Clone, Default)]
pub struct CompileOutput {
    /// The produced CSS text.
    pub source: String,
    /// Build dependencies of the transform result.
    pub watch_files: Vec<PathBuf>,
}

/// Style-to-CSS compiler.
#[allow(async_fn_in_trait)]
pub trait StyleCompiler: Send + Sync {
    async fn compile(&self, request: CompileRequest<'_>) -> Result<CompileOutput>;
}
