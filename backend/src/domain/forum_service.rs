//! Forum service: posts, replies, views, upvotes and the solved marker.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::error::Error;
use crate::domain::forum::{ForumPost, ForumPostFilter, ForumPostPatch, NewForumPost, Reply};
use crate::domain::identity::Caller;
use crate::domain::ports::ForumRepository;

fn not_found() -> Error {
    Error::not_found("Post not found")
}

/// Orchestrates gate checks and store calls for forum posts.
#[derive(Clone)]
pub struct ForumService {
    repo: Arc<dyn ForumRepository>,
}

impl ForumService {
    pub fn new(repo: Arc<dyn ForumRepository>) -> Self {
        Self { repo }
    }

    /// Matching posts in the requested order.
    pub async fn list(&self, filter: ForumPostFilter) -> Result<Vec<ForumPost>, Error> {
        Ok(self.repo.list(filter).await?)
    }

    /// Fetch a post for display, counting the view.
    pub async fn read(&self, id: Uuid) -> Result<ForumPost, Error> {
        self.repo.record_view(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, caller: &Caller, new: NewForumPost) -> Result<ForumPost, Error> {
        authorize(ResourceKind::ForumPost, None, caller, Action::Create)?;
        let post = ForumPost::new(new, caller.id, Utc::now())?;
        Ok(self.repo.insert(post).await?)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: ForumPostPatch,
    ) -> Result<ForumPost, Error> {
        let post = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::ForumPost,
            Some(&post.author),
            caller,
            Action::Update,
        )?;
        self.repo
            .update(id, patch, Utc::now())
            .await?
            .ok_or_else(not_found)
    }

    /// Append a reply. Any authenticated caller.
    pub async fn add_reply(
        &self,
        caller: &Caller,
        id: Uuid,
        content: String,
    ) -> Result<ForumPost, Error> {
        let reply = Reply::new(content, caller.id, Utc::now())?;
        self.repo.add_reply(id, reply).await?.ok_or_else(not_found)
    }

    /// Flip the caller's upvote. No role restriction.
    pub async fn toggle_upvote(&self, caller: &Caller, id: Uuid) -> Result<ForumPost, Error> {
        self.repo
            .toggle_upvote(id, caller.id)
            .await?
            .ok_or_else(not_found)
    }

    /// Flip the solved marker. Author only; admins are not exempt.
    pub async fn toggle_solved(&self, caller: &Caller, id: Uuid) -> Result<ForumPost, Error> {
        let post = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::ForumPost,
            Some(&post.author),
            caller,
            Action::MarkSolved,
        )?;
        self.repo
            .toggle_solved(id, Utc::now())
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let post = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::ForumPost,
            Some(&post.author),
            caller,
            Action::Delete,
        )?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
