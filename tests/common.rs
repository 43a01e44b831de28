//! Shared test utilities for integration tests.
//!
//! Provides builders for seeded in-memory stores and post fixtures used
//! across multiple test files.

use inkpress::{MemoryStore, Post, PostStatus};

/// Creates a store seeded with published posts carrying the given slugs.
///
/// Post ids are `p0`, `p1`, ... in slug order.
pub fn store_with_slugs(slugs: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (i, slug) in slugs.iter().enumerate() {
        store.insert_post(published_post(&format!("p{i}"), slug));
    }
    store
}

/// Creates a store with registered image token mappings.
pub fn store_with_images(mappings: &[(&str, &str)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (token, url) in mappings {
        store.add_image(*token, *url);
    }
    store
}

/// Creates a published post fixture with the given id and slug.
pub fn published_post(id: &str, slug: &str) -> Post {
    Post {
        id: id.to_string(),
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        body: format!("Body of {slug}"),
        excerpt: None,
        tags: vec!["test".to_string()],
        status: PostStatus::Published,
        published_at: Some(1_700_000_000),
        created_at: 1_700_000_000,
        updated_at: 1_700_000_000,
    }
}
