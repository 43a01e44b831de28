//! Storage collaborator contract.
//!
//! The pipelines never own persistence. They consume two narrow read
//! operations from whatever storage backs the site: a point lookup by slug
//! and opaque-token resolution to a public URL. `MemoryStore` is the
//! in-process implementation used by tests and the preview binary.

use crate::post::Post;
use std::collections::HashMap;

/// Read operations the content pipelines require from storage.
///
/// `find_by_slug` backs the uniqueness check in slug derivation. The check
/// is advisory under concurrency: two writers can both observe a free slug
/// and insert duplicates. The storage layer must hold the authoritative
/// unique index on `slug`; callers should re-derive and retry when their
/// insert reports a conflict.
pub trait ContentStore {
    /// Finds a post by exact slug.
    fn find_by_slug(&self, slug: &str) -> Option<Post>;

    /// Resolves an opaque image token to a public URL.
    ///
    /// Fails soft: any backend error, unknown token, or timeout surfaces as
    /// `None`. Resolution is a pure read, safe to retry or run out of order.
    fn resolve_public_url(&self, token: &str) -> Option<String>;
}

/// In-memory content store backed by hash maps.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    posts: HashMap<String, Post>,
    images: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a post, keyed by its id.
    pub fn insert_post(&mut self, post: Post) {
        self.posts.insert(post.id.clone(), post);
    }

    /// Returns the post with the given id.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Registers a public URL for an opaque image token.
    pub fn add_image(&mut self, token: impl Into<String>, url: impl Into<String>) {
        self.images.insert(token.into(), url.into());
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl ContentStore for MemoryStore {
    fn find_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.values().find(|post| post.slug == slug).cloned()
    }

    fn resolve_public_url(&self, token: &str) -> Option<String> {
        self.images.get(token).cloned()
    }
}
