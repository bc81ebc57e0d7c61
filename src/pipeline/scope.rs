//! File-scope rewriting for server-side rendering.
//!
//! SSR transforms do not extract CSS; they only rewrite the source's file
//! scope so style identifiers are named by package-relative path.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::core::js_string;

/// Module exporting the file-scope functions in the style runtime.
const FILE_SCOPE_MODULE: &str = "@vanilla-extract/css/fileScope";

static SET_FILE_SCOPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"setFileScope\s*\(([^)]*)\)").unwrap());

/// Rewrite `source` so its file scope names `scope_path` within
/// `package_name`.
///
/// Sources already carrying a `setFileScope(...)` call get its arguments
/// replaced in place; anything else is wrapped with a scope prologue and
/// epilogue.
pub fn rewrite(source: &str, scope_path: &str, package_name: &str) -> String {
    let call = format!(
        "setFileScope({}, {})",
        js_string(scope_path),
        js_string(package_name)
    );

    if SET_FILE_SCOPE_RE.is_match(source) {
        return SET_FILE_SCOPE_RE
            .replace(source, NoExpand(&call))
            .into_owned();
    }

    format!(
        "import {{ setFileScope, endFileScope }} from \"{FILE_SCOPE_MODULE}\";\n{call};\n{source}\nendFileScope();\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_unscoped_source() {
        let out = rewrite("export const x = style({});", "src/a.css.ts", "app");
        assert!(out.starts_with(
            "import { setFileScope, endFileScope } from \"@vanilla-extract/css/fileScope\";"
        ));
        assert!(out.contains(r#"setFileScope("src/a.css.ts", "app");"#));
        assert!(out.contains("export const x = style({});"));
        assert!(out.trim_end().ends_with("endFileScope();"));
    }

    #[test]
    fn test_replaces_existing_scope_call() {
        let source = "setFileScope(\"old/path.css.ts\", \"old-pkg\");\nconst a = 1;";
        let out = rewrite(source, "src/a.css.ts", "app");
        assert!(out.contains(r#"setFileScope("src/a.css.ts", "app")"#));
        assert!(!out.contains("old/path.css.ts"));
        // No double wrapping
        assert!(!out.contains("endFileScope();\nconst a"));
        assert_eq!(out.matches("setFileScope(").count(), 1);
    }

    #[test]
    fn test_replacement_is_literal() {
        // `$` in paths must not be treated as a capture-group reference
        let out = rewrite("setFileScope(\"x\", \"y\");", "src/$dir/a.css.ts", "app");
        assert!(out.contains(r#"setFileScope("src/$dir/a.css.ts", "app")"#));
    }
}
