//! Stylebridge - bundler integration for compiled style modules.
//!
//! Turns style-definition source files (`*.css.ts` and friends) into runtime
//! CSS, registers the result as addressable virtual modules, and pushes hot
//! updates to connected clients during development.
//!
//! # Architecture
//!
//! ```text
//! transform -> compile -> post-process -> registry
//!                              |             ^
//!                              v             |
//!                        dev session    resolve/load
//!                      (invalidate + push)
//! ```
//!
//! The style-to-CSS compiler and the CSS post-processing chain are opaque
//! collaborators; hosts inject them through the [`compile::StyleCompiler`]
//! and [`compile::CssPostProcessor`] traits.

pub mod bridge;
pub mod compile;
pub mod config;
pub mod core;
pub mod logger;
pub mod pipeline;
pub mod plugin;
pub mod registry;
pub mod reload;

pub use plugin::StylePlugin;
