//! Plugin configuration resolved from the host.
//!
//! The host hands down its final configuration once (`configResolved`);
//! package context is discovered at that point so every later transform can
//! rely on it. Missing package context fails fast here rather than per-file.

mod error;
mod package;

pub use error::ConfigError;
pub use package::PackageInfo;

use std::path::PathBuf;

use crate::core::WatchMode;

/// Host build command the plugin was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full build (optionally with watch); output is written to disk.
    Build,
    /// Incremental dev serve session.
    Serve,
}

/// Configuration handed down by the host once its own config is final.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Project root: compilation cwd and the base for package discovery.
    pub root: PathBuf,
    pub command: Command,
}

/// Fully resolved plugin configuration.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub command: Command,
    /// The package owning the project's style files.
    pub package: PackageInfo,
}

impl ResolvedConfig {
    /// Resolve the host config, failing fast when the owning package cannot
    /// be identified (every SSR transform needs it).
    pub fn resolve(host: HostConfig) -> Result<Self, ConfigError> {
        let package = PackageInfo::discover(&host.root)?;
        Ok(Self {
            root: host.root,
            command: host.command,
            package,
        })
    }

    pub fn watch_mode(&self) -> WatchMode {
        match self.command {
            Command::Serve => WatchMode::Serve,
            Command::Build => WatchMode::FullRebuild,
        }
    }
}
