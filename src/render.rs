//! The content render pipeline.
//!
//! Composes reference hydration, markdown rendering, and sanitization into
//! a single operation that turns a stored markdown body into HTML safe for
//! direct embedding. The pipeline is stateless between invocations and
//! never fails: every internal problem degrades output quality instead of
//! surfacing an error, because rendering runs on the public,
//! unauthenticated read path.

use crate::markdown::{MarkdownRenderer, extract_tokens, resolve_tokens, substitute};
use crate::sanitize::sanitize;
use crate::store::ContentStore;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Renders stored markdown bodies to sanitized HTML.
///
/// Rendered HTML is never persisted; callers run this once per read. The
/// output is a pure function of the body plus the resolver's current
/// answers, so re-rendering with the same store state is byte-identical.
pub struct ContentRenderer<'a> {
    markdown: MarkdownRenderer<'a>,
}

impl<'a> ContentRenderer<'a> {
    /// Creates a renderer with the default markdown configuration.
    pub fn new() -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
        }
    }

    /// Renders a markdown body to sanitized HTML.
    ///
    /// Stages, in order: extract distinct `![alt](ref:token)` references,
    /// resolve each token through the store (failures leave the reference
    /// unresolved), rewrite resolved references, render markdown, sanitize
    /// against the static allow-lists. Substitution observes the complete
    /// resolution set before any rewriting happens.
    ///
    /// # Arguments
    ///
    /// * `store`: Storage collaborator for image token resolution
    /// * `body`: Markdown source, untrusted
    ///
    /// # Returns
    ///
    /// Sanitized HTML; never an error, degraded output at worst
    pub fn render(&self, store: &dyn ContentStore, body: &str) -> String {
        let tokens = extract_tokens(body);
        let resolved = resolve_tokens(store, &tokens);
        let hydrated = substitute(body, &resolved);

        // comrak reports no errors; a panic must not take down the read path
        let html = catch_unwind(AssertUnwindSafe(|| self.markdown.to_html(&hydrated)))
            .unwrap_or_else(|_| {
                log::warn!("markdown rendering panicked; falling back to plain text");
                MarkdownRenderer::fallback_html(&hydrated)
            });

        sanitize(&html)
    }
}

impl<'a> Default for ContentRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
