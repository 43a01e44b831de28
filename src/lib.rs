//! Blog content pipelines: slug derivation and sanitized markdown rendering.

mod config;
mod error;
mod excerpt;
mod markdown;
mod post;
mod render;
mod sanitize;
mod slug;
mod store;

pub use config::Config;
pub use error::SlugError;
pub use excerpt::{DEFAULT_EXCERPT_LEN, derive_excerpt};
pub use markdown::{MarkdownRenderer, extract_tokens, resolve_tokens, substitute};
pub use post::{
    Post, PostChanges, PostDraft, PostStatus, PostUpdate, PreparedPost, prepare_post,
    prepare_update,
};
pub use render::ContentRenderer;
pub use sanitize::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, ALLOWED_URL_SCHEMES, sanitize};
pub use slug::{FALLBACK_SLUG, derive_slug, slugify};
pub use store::{ContentStore, MemoryStore};
