//! Shared core types.

mod mode;
mod virtual_id;

pub use mode::{Mode, WatchMode};
pub use virtual_id::{STYLE_UPDATE_PREFIX, VirtualId, is_style_file, strip_query};

/// Encode a string as a JS string literal.
///
/// JSON string encoding doubles as JS escaping; the fallback never fires for
/// string input but keeps the call sites panic-free.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string("plain"), r#""plain""#);
        assert_eq!(js_string(".x{content:\"a\"}"), r#"".x{content:\"a\"}""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
    }
}
