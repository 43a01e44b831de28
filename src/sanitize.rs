//! HTML sanitization for rendered content.
//!
//! The single security-critical invariant of the render pipeline lives
//! here: no output may contain an executable script context, regardless of
//! input. The policy is expressed as static allow-list tables so it can be
//! audited and tested exhaustively, and applied with ammonia's HTML5
//! tree-rebuilding cleaner rather than string matching.

use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Tags permitted in sanitized output.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "strong", "em", "u", "s", "ul", "ol", "li",
    "blockquote", "code", "pre", "a", "img", "hr", "table", "thead", "tbody", "tr", "th", "td",
];

/// Attributes permitted per tag; tags absent here keep no attributes.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title"]),
    ("img", &["src", "alt", "title"]),
    ("code", &["class"]),
    ("pre", &["class"]),
];

/// URL schemes permitted on `href` and `src` attributes.
///
/// Anything else, notably `javascript:`, is stripped.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "data"];

/// Sanitizes rendered HTML against the static allow-lists.
///
/// Tags outside [`ALLOWED_TAGS`] are stripped (script and style lose their
/// contents as well), attributes outside [`ALLOWED_ATTRIBUTES`] are
/// dropped, and URL-valued attributes with a scheme outside
/// [`ALLOWED_URL_SCHEMES`] are removed entirely.
///
/// # Arguments
///
/// * `html`: Untrusted HTML, typically fresh out of the markdown renderer
///
/// # Returns
///
/// HTML safe for direct embedding in a page
pub fn sanitize(html: &str) -> String {
    let tag_attributes: HashMap<&str, HashSet<&str>> = ALLOWED_ATTRIBUTES
        .iter()
        .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
        .collect();

    Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect())
        .link_rel(None)
        .clean(html)
        .to_string()
}
