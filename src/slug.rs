//! Slug derivation for content items.
//!
//! Turns a human-supplied title into a URL-safe identifier and resolves
//! collisions against the storage collaborator by appending a numeric
//! suffix. Titles that normalize to nothing fall back to the fixed token
//! [`FALLBACK_SLUG`], which then goes through the same uniqueness loop.

use crate::error::SlugError;
use crate::store::ContentStore;

/// Candidate used when a title normalizes to an empty string.
///
/// Fixed so derivation is reproducible: a title of all punctuation always
/// yields `post`, `post-1`, `post-2`, ... depending on what storage holds.
pub const FALLBACK_SLUG: &str = "post";

/// Upper bound on numeric suffix attempts before giving up.
///
/// The suffix space is unbounded, so the loop only fails here when the
/// storage collaborator reports every candidate as taken.
const MAX_SUFFIX_ATTEMPTS: u32 = 10_000;

/// Normalizes arbitrary text into slug form.
///
/// Lowercases, trims, drops every character that is not ASCII alphanumeric,
/// and collapses runs of whitespace, hyphens, and underscores into a single
/// hyphen separator. Dropped punctuation does not create a separator, so
/// `"rock&roll"` becomes `rockroll` while `"Hello, World!"` becomes
/// `hello-world`. Underscores count as separators rather than slug
/// characters so the result always matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is
/// empty.
///
/// # Arguments
///
/// * `text`: Title or caller-supplied slug candidate, arbitrary Unicode
///
/// # Returns
///
/// Normalized slug, possibly empty when no ASCII alphanumerics survive
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
        // Other characters are stripped without forcing a separator
    }

    slug
}

/// Derives a unique slug for a content item.
///
/// The candidate is the caller-supplied slug when present and non-empty
/// (normalized, so the format invariant holds regardless of input source),
/// otherwise the normalized title. When the candidate collides with an
/// existing item, numeric suffixes `-1`, `-2`, ... are tried in order until
/// a free slug is found.
///
/// The uniqueness check is advisory under concurrency: see
/// [`ContentStore::find_by_slug`]. Storage owns the authoritative unique
/// index; callers retry derivation when their insert reports a conflict.
///
/// # Arguments
///
/// * `store`: Storage collaborator queried for existing slugs
/// * `title`: Human-supplied title, arbitrary Unicode
/// * `explicit_slug`: Caller-supplied candidate overriding the title
/// * `exclude_id`: Item id whose own slug does not count as a conflict,
///   used on update so an item cannot collide with itself
///
/// # Returns
///
/// A slug matching `^[a-z0-9]+(-[a-z0-9]+)*$`, free in storage at the time
/// of the check
///
/// # Errors
///
/// Returns [`SlugError::Exhausted`] when the suffix search exceeds its
/// bound without finding a free slug
pub fn derive_slug(
    store: &dyn ContentStore,
    title: &str,
    explicit_slug: Option<&str>,
    exclude_id: Option<&str>,
) -> Result<String, SlugError> {
    let base = match explicit_slug {
        Some(explicit) if !explicit.trim().is_empty() => slugify(explicit),
        _ => slugify(title),
    };

    let base = if base.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        base
    };

    if is_free(store, &base, exclude_id) {
        return Ok(base);
    }

    for suffix in 1..=MAX_SUFFIX_ATTEMPTS {
        let candidate = format!("{base}-{suffix}");
        if is_free(store, &candidate, exclude_id) {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted { base })
}

/// Checks whether a slug is free in storage.
///
/// A hit whose id equals `exclude_id` does not count as a conflict.
fn is_free(store: &dyn ContentStore, slug: &str, exclude_id: Option<&str>) -> bool {
    match store.find_by_slug(slug) {
        None => true,
        Some(existing) => exclude_id.is_some_and(|id| existing.id == id),
    }
}
