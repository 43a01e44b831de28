//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and hydration of opaque
//! image references into public URLs.

mod refs;
mod renderer;

pub use refs::{extract_tokens, resolve_tokens, substitute};
pub use renderer::MarkdownRenderer;
