//! Content item model and write-side preparation.
//!
//! The crate never persists anything itself: `prepare_post` and
//! `prepare_update` compose the slug and excerpt pipelines into the exact
//! field set a storage collaborator would insert or patch. Timestamps are
//! passed in by the caller so preparation stays deterministic.

use crate::error::SlugError;
use crate::excerpt::{DEFAULT_EXCERPT_LEN, derive_excerpt};
use crate::slug::derive_slug;
use crate::store::ContentStore;

/// Publication state of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    /// Visible to editors only.
    Draft,
    /// Visible on the public reading path.
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// A stored content item, as the storage collaborator returns it.
///
/// `slug` is unique within the collection and immutable once set unless an
/// update explicitly supplies a new value. Rendered HTML is never stored on
/// the item; it is recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Storage-assigned identifier.
    pub id: String,
    /// Human-supplied title, arbitrary Unicode.
    pub title: String,
    /// URL-safe unique identifier derived from the title.
    pub slug: String,
    /// Markdown source, may contain opaque `![alt](ref:token)` references.
    pub body: String,
    /// Editor-supplied excerpt override; derived from the body when absent.
    pub excerpt: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Publication state.
    pub status: PostStatus,
    /// Unix seconds of first publication, if ever published.
    pub published_at: Option<i64>,
    /// Unix seconds of creation.
    pub created_at: i64,
    /// Unix seconds of last modification.
    pub updated_at: i64,
}

/// Input for creating a content item.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    /// Explicit slug candidate; derived from the title when absent.
    pub slug: Option<String>,
    pub body: String,
    /// Excerpt override; derived from the body when absent.
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
}

/// Field set ready for the storage collaborator to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPost {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub published_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Partial update for an existing content item.
///
/// `None` fields are left untouched in storage.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    /// New explicit slug; the stored slug is immutable when absent.
    pub slug: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
}

/// Field set ready for the storage collaborator to patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub published_at: Option<i64>,
    pub updated_at: i64,
}

/// Prepares a draft for insertion.
///
/// Runs the slug pipeline once (explicit candidate preferred over the
/// title) and derives the excerpt from the body when no override is
/// supplied. A draft created as published is stamped with `now`.
///
/// # Arguments
///
/// * `store`: Storage collaborator consulted for slug uniqueness
/// * `draft`: Fields supplied by the editor
/// * `now`: Current time, Unix seconds
///
/// # Errors
///
/// Returns [`SlugError::Exhausted`] when no free slug can be found
pub fn prepare_post(
    store: &dyn ContentStore,
    draft: PostDraft,
    now: i64,
) -> Result<PreparedPost, SlugError> {
    let slug = derive_slug(store, &draft.title, draft.slug.as_deref(), None)?;

    let excerpt = draft
        .excerpt
        .unwrap_or_else(|| derive_excerpt(&draft.body, DEFAULT_EXCERPT_LEN));

    let published_at = match draft.status {
        PostStatus::Published => Some(now),
        PostStatus::Draft => None,
    };

    Ok(PreparedPost {
        title: draft.title,
        slug,
        body: draft.body,
        excerpt,
        tags: draft.tags,
        status: draft.status,
        published_at,
        created_at: now,
        updated_at: now,
    })
}

/// Prepares a partial update for an existing item.
///
/// The slug is re-derived only when the caller supplies a new explicit
/// value differing from the stored one; the item's own slug never counts
/// as a conflict. The excerpt is re-derived only when the body changed
/// without an accompanying override. Transitioning to published stamps
/// `published_at` once; later updates never move it.
///
/// # Arguments
///
/// * `store`: Storage collaborator consulted for slug uniqueness
/// * `post`: Stored item being updated
/// * `update`: Fields the editor changed
/// * `now`: Current time, Unix seconds
///
/// # Errors
///
/// Returns [`SlugError::Exhausted`] when no free slug can be found
pub fn prepare_update(
    store: &dyn ContentStore,
    post: &Post,
    update: PostUpdate,
    now: i64,
) -> Result<PostChanges, SlugError> {
    let mut changes = PostChanges {
        updated_at: now,
        ..PostChanges::default()
    };

    if let Some(explicit) = update.slug
        && explicit != post.slug
    {
        let title = update.title.as_deref().unwrap_or(&post.title);
        changes.slug = Some(derive_slug(
            store,
            title,
            Some(explicit.as_str()),
            Some(post.id.as_str()),
        )?);
    }

    if let Some(status) = update.status {
        changes.status = Some(status);
        if status == PostStatus::Published && post.published_at.is_none() {
            changes.published_at = Some(now);
        }
    }

    if let Some(body) = update.body {
        if update.excerpt.is_none() {
            changes.excerpt = Some(derive_excerpt(&body, DEFAULT_EXCERPT_LEN));
        }
        changes.body = Some(body);
    }

    if update.excerpt.is_some() {
        changes.excerpt = update.excerpt;
    }

    changes.title = update.title;
    changes.tags = update.tags;

    Ok(changes)
}
