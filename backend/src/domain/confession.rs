//! Anonymous confessions, hidden from the public feed until approved.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::bounded_text;
use crate::domain::identity::CallerId;
use crate::domain::votes::Votable;

const CONTENT_MAX: usize = 1000;

/// A confession record. `author` is retained for moderation and ownership
/// checks even when the post is anonymous; adapters never expose it as a
/// display name because identity lives outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Confession {
    pub id: Uuid,
    pub content: String,
    pub is_anonymous: bool,
    #[schema(value_type = String)]
    pub author: CallerId,
    pub is_approved: bool,
    pub likes: u32,
    #[schema(value_type = Vec<String>)]
    pub liked_by: Vec<CallerId>,
    pub created_at: DateTime<Utc>,
}

/// Listing filter: the public feed only shows approved confessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfessionFilter {
    pub approved_only: bool,
}

impl ConfessionFilter {
    pub fn matches(&self, confession: &Confession) -> bool {
        !self.approved_only || confession.is_approved
    }
}

impl Confession {
    /// Build a new, unapproved confession.
    pub fn new(
        content: String,
        is_anonymous: bool,
        author: CallerId,
        now: DateTime<Utc>,
    ) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            content: bounded_text("content", content, CONTENT_MAX)?,
            is_anonymous,
            author,
            is_approved: false,
            likes: 0,
            liked_by: Vec::new(),
            created_at: now,
        })
    }

    /// Feed order: newest first.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Votable for Confession {
    fn voters(&self) -> &[CallerId] {
        &self.liked_by
    }

    fn voters_mut(&mut self) -> &mut Vec<CallerId> {
        &mut self.liked_by
    }

    fn vote_count(&self) -> u32 {
        self.likes
    }

    fn set_vote_count(&mut self, count: u32) {
        self.likes = count;
    }
}
