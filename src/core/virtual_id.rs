//! Virtual module identity.
//!
//! A style file compiles to CSS addressed by a virtual module id: the
//! requesting file id with any `?query` suffix truncated and the final
//! extension stripped (`src/a.css.ts?used` -> `src/a.css`). The id is stable
//! across recompilations, so consumers keep resolving to the same module.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Event-name prefix for per-module style update channels.
///
/// Identical to the vanilla-extract runtime's event name so generated shims
/// interoperate with its browser-side injection handler.
pub const STYLE_UPDATE_PREFIX: &str = "vanilla-extract-style-update";

/// Matches style-definition source files (`a.css.ts`, `a.css.js`, ...),
/// with or without a query suffix.
static STYLE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.css\.(js|cjs|mjs|jsx|ts|tsx)(\?.*)?$").unwrap());

/// Check if a module id follows the style-file naming convention.
pub fn is_style_file(id: &str) -> bool {
    STYLE_FILE_RE.is_match(id)
}

/// Truncate a module id at the first `?`, yielding a plain filesystem path.
pub fn strip_query(id: &str) -> &str {
    id.split('?').next().unwrap_or(id)
}

// ============================================================================
// VirtualId
// ============================================================================

/// Identifier of a virtual CSS module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualId(String);

impl VirtualId {
    /// Derive from the requesting file id: query suffix truncated, final
    /// extension stripped.
    pub fn from_file_id(id: &str) -> Self {
        let valid = strip_query(id);
        // Only strip a dot inside the final path segment
        let stem_end = valid
            .rfind('.')
            .filter(|&dot| !valid[dot..].contains('/'))
            .unwrap_or(valid.len());
        Self(valid[..stem_end].to_string())
    }

    /// Wrap an id the host hands back on resolve/load. No derivation: the id
    /// was produced by [`VirtualId::from_file_id`] during a prior transform.
    pub fn from_raw(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of this module's update channel,
    /// e.g. `vanilla-extract-style-update:src/a.css`.
    pub fn update_event(&self) -> String {
        format!("{STYLE_UPDATE_PREFIX}:{}", self.0)
    }
}

impl fmt::Display for VirtualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
