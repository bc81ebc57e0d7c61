//! Emission mode: static build vs. active development session.

use crate::reload::DevSession;

/// The single switch between static CSS emission and injection-shim
/// emission with hot updates.
#[derive(Clone, Default)]
pub enum Mode {
    /// Static build: `load` returns raw CSS, changes are not broadcast.
    #[default]
    Static,
    /// Active dev session: `load` returns injection shims, changed CSS is
    /// pushed to connected clients.
    Dev(DevSession),
}

impl Mode {
    pub fn session(&self) -> Option<&DevSession> {
        match self {
            Mode::Dev(session) => Some(session),
            Mode::Static => None,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Mode::Dev(_))
    }
}

/// Watch-file registration policy for transform results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchMode {
    /// Incremental serve session: a file never registers itself as its own
    /// watcher (self-triggering loop).
    Serve,
    /// Full rebuild with watch: every compiler-reported file is registered
    /// unconditionally.
    FullRebuild,
}
