//! Injection shim generation.
//!
//! In a dev session `load` returns generated code that applies the module's
//! CSS at evaluation time and re-applies it on every update pushed for the
//! module, giving live restyling without a full page refresh.

use crate::core::{VirtualId, js_string};

/// Runtime module exporting the style injection function.
const INJECT_MODULE: &str = "@vanilla-extract/css/injectStyles";

/// Render the dev-mode module body for a virtual id and its current CSS.
pub fn render(virtual_id: &VirtualId, css: &str) -> String {
    let file_path = js_string(virtual_id.as_str());
    let event = js_string(&virtual_id.update_event());
    let css_literal = js_string(css);

    format!(
        r#"import {{ injectStyles }} from "{INJECT_MODULE}";
const inject = (css) => injectStyles({{
  fileScope: {{ filePath: {file_path} }},
  css,
}});
inject({css_literal});
if (import.meta.hot) {{
  import.meta.hot.on({event}, (css) => {{
    inject(css);
  }});
}}
"#
    )
}
