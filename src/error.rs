//! Typed errors surfaced across the library boundary.
//!
//! Only slug derivation produces a typed error. Failures inside the render
//! pipeline (unresolvable image references, markdown fallback) are recovered
//! locally and degrade the output instead of propagating, since rendering
//! runs on the public read path.

use thiserror::Error;

/// Errors from slug derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// Numeric suffix search exceeded its bound without finding a free slug.
    ///
    /// Fatal to the create/update operation that requested the slug. Guards
    /// against a storage collaborator that reports every candidate as taken.
    #[error("slug space exhausted for base `{base}`")]
    Exhausted {
        /// Normalized base candidate the suffix search started from.
        base: String,
    },
}
