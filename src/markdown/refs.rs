//! Opaque image reference extraction and resolution.
//!
//! Markdown bodies may embed images as `![alt](ref:<token>)`, where the
//! token is an opaque identifier only the storage collaborator can turn
//! into a public URL. Rendering hydrates these references in three steps:
//! extract the distinct tokens, resolve each independently, then rewrite
//! the body in a single pass. A token that fails to resolve keeps its
//! literal `ref:` target, a visibly broken image rather than a render
//! failure.

use crate::store::ContentStore;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static IMAGE_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(ref:([^)]+)\)").expect("valid image reference regex"));

/// Extracts distinct opaque image tokens from a markdown body.
///
/// Alt text may be empty; the token is any run of characters excluding `)`.
/// Duplicate references are reported once, preserving first-seen order.
///
/// # Arguments
///
/// * `body`: Markdown source to scan
///
/// # Returns
///
/// Distinct tokens in order of first occurrence
pub fn extract_tokens(body: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for captures in IMAGE_REF_RE.captures_iter(body) {
        let token = &captures[2];
        if !tokens.iter().any(|seen| seen == token) {
            tokens.push(token.to_string());
        }
    }

    tokens
}

/// Resolves tokens to public URLs through the storage collaborator.
///
/// Each token resolves independently; a token the store cannot resolve is
/// logged and omitted from the map, never aborting the others.
///
/// # Arguments
///
/// * `store`: Storage collaborator answering token lookups
/// * `tokens`: Distinct tokens to resolve
///
/// # Returns
///
/// Map from token to resolved public URL, containing only successes
pub fn resolve_tokens(store: &dyn ContentStore, tokens: &[String]) -> HashMap<String, String> {
    let mut resolved = HashMap::new();

    for token in tokens {
        match store.resolve_public_url(token) {
            Some(url) => {
                resolved.insert(token.clone(), url);
            }
            None => {
                log::warn!("failed to resolve image reference `{token}`; leaving unresolved");
            }
        }
    }

    resolved
}

/// Rewrites resolved image references to their public URLs.
///
/// Replaces every `![alt](ref:<token>)` whose token appears in `resolved`
/// with `![alt](<url>)`. Unresolved tokens are left untouched. The rewrite
/// is a single pass over the original body, so replacement text is never
/// rescanned and a URL containing `ref:` cannot trigger double
/// substitution.
///
/// # Arguments
///
/// * `body`: Markdown source containing opaque references
/// * `resolved`: Token to URL map from [`resolve_tokens`]
///
/// # Returns
///
/// Body with resolved references rewritten
pub fn substitute(body: &str, resolved: &HashMap<String, String>) -> String {
    IMAGE_REF_RE
        .replace_all(body, |captures: &Captures<'_>| {
            let alt = &captures[1];
            let token = &captures[2];
            match resolved.get(token) {
                Some(url) => format!("![{alt}]({url})"),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}
