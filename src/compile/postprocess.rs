//! CSS post-processing.
//!
//! An opaque text-to-text transform applied to compiled CSS before it is
//! registered. Invoked with no source map and no originating path.

use anyhow::{Result, anyhow};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Post-processing transform over compiled CSS text.
#[allow(async_fn_in_trait)]
pub trait CssPostProcessor: Send + Sync {
    async fn process(&self, css: &str) -> Result<String>;
}

/// Built-in post-processor: lightningcss parse and reprint, optionally
/// minified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningProcessor {
    pub minify: bool,
}

impl LightningProcessor {
    pub fn minified() -> Self {
        Self { minify: true }
    }
}

impl CssPostProcessor for LightningProcessor {
    async fn process(&self, css: &str) -> Result<String> {
        // lightningcss errors borrow the input; stringify before returning
        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| anyhow!("css parse error: {e}"))?;
        let result = stylesheet
            .to_css(PrinterOptions {
                minify: self.minify,
                ..PrinterOptions::default()
            })
            .map_err(|e| anyhow!("css print error: {e}"))?;
        Ok(result.code)
    }
}
