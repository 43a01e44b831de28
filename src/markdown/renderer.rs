//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides the GFM extensions the blog editor supports (tables,
/// strikethrough, autolinks, task lists) with soft line breaks rendered as
/// `<br>`. Raw HTML passes through untouched: safety is owned entirely by
/// the sanitization stage that runs on this renderer's output, so the
/// allow-list there is the single place the security invariant lives.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures the GFM extension set and break semantics:
    /// - Tables, strikethrough, autolinks, task lists
    /// - Soft breaks become `<br>` (hardbreaks)
    /// - Raw HTML is passed through for the sanitizer to police
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        // Render options
        options.render.hardbreaks = true;
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    ///
    /// The output is unsanitized; callers on a display path must pass it
    /// through the sanitization stage before embedding.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML as string
    pub fn to_html(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Minimal transform used when markdown rendering is unavailable.
    ///
    /// Escapes the text and converts line breaks to `<br />`. Display-path
    /// errors degrade to this rather than propagating, since rendering runs
    /// on every public page view.
    ///
    /// # Arguments
    ///
    /// * `content`: Raw text to present
    ///
    /// # Returns
    ///
    /// HTML-safe string with preserved line breaks
    pub fn fallback_html(content: &str) -> String {
        Self::html_escape(content).replace('\n', "<br />")
    }

    /// Escapes HTML special characters.
    fn html_escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Hello\n\nThis is **bold** text.";

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Hello"), "Should contain heading text");
        assert!(html.contains("<strong>"), "Should contain strong tag");
        assert!(html.contains("bold"), "Should contain bold text");
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = r#"
| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |
"#;

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<th>"), "Should contain table header");
        assert!(html.contains("Header 1"), "Should contain header text");
        assert!(html.contains("<td>"), "Should contain table cell");
        assert!(html.contains("Cell 1"), "Should contain cell text");
    }

    #[test]
    fn test_render_gfm_strikethrough() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "This is ~~strikethrough~~ text.";

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(
            html.contains("<del>") || html.contains("<s>"),
            "Should contain strikethrough tag: {}",
            html
        );
        assert!(html.contains("strikethrough"), "Should contain text");
    }

    #[test]
    fn test_render_soft_breaks_as_br() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "line one\nline two";

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(
            html.contains("<br"),
            "Soft line breaks should render as <br>: {}",
            html
        );
    }

    #[test]
    fn test_render_autolinks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "Visit https://example.com for more info.";

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(html.contains("<a "), "Should contain link tag");
        assert!(
            html.contains("https://example.com"),
            "Should contain URL: {}",
            html
        );
    }

    #[test]
    fn test_render_html_passthrough() {
        // Arrange: raw HTML reaches the sanitizer stage intact
        let renderer = MarkdownRenderer::new();
        let markdown = "<script>alert('xss')</script>\n\nNormal text.";

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(
            html.contains("<script>"),
            "Renderer itself passes raw HTML through: {}",
            html
        );
        assert!(html.contains("Normal text"), "Should contain safe text");
    }

    #[test]
    fn test_render_empty_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer.to_html("");

        // Assert
        assert!(html.is_empty(), "Empty input renders to empty output");
    }

    #[test]
    fn test_render_lists() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = r#"
- Item 1
- Item 2
  - Nested item
"#;

        // Act
        let html = renderer.to_html(markdown);

        // Assert
        assert!(html.contains("<ul>"), "Should contain unordered list");
        assert!(html.contains("<li>"), "Should contain list item");
        assert!(html.contains("Item 1"), "Should contain item text");
    }

    #[test]
    fn test_default_constructor() {
        // Arrange & Act
        let renderer = MarkdownRenderer::default();
        let html = renderer.to_html("# Test");

        // Assert
        assert!(html.contains("<h1>"), "Default renderer should work");
    }

    #[test]
    fn test_fallback_escapes_and_preserves_breaks() {
        // Arrange
        let content = "a < b\nc & d";

        // Act
        let html = MarkdownRenderer::fallback_html(content);

        // Assert
        assert_eq!(html, "a &lt; b<br />c &amp; d");
    }

    #[test]
    fn test_fallback_neutralizes_script() {
        // Arrange
        let content = "<script>alert('xss')</script>";

        // Act
        let html = MarkdownRenderer::fallback_html(content);

        // Assert
        assert!(
            !html.contains("<script"),
            "Fallback must escape markup: {}",
            html
        );
    }
}
