//! Confession feed service: anonymous posts behind a moderation gate.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::confession::{Confession, ConfessionFilter};
use crate::domain::error::Error;
use crate::domain::identity::Caller;
use crate::domain::ports::ConfessionRepository;

fn not_found() -> Error {
    Error::not_found("Confession not found")
}

/// Orchestrates gate checks and store calls for confessions.
#[derive(Clone)]
pub struct ConfessionService {
    repo: Arc<dyn ConfessionRepository>,
}

impl ConfessionService {
    pub fn new(repo: Arc<dyn ConfessionRepository>) -> Self {
        Self { repo }
    }

    /// The public feed: approved confessions only, newest first.
    pub async fn list_public(&self) -> Result<Vec<Confession>, Error> {
        Ok(self
            .repo
            .list(ConfessionFilter {
                approved_only: true,
            })
            .await?)
    }

    /// The moderation feed: every confession including pending ones.
    pub async fn list_all(&self, caller: &Caller) -> Result<Vec<Confession>, Error> {
        authorize(ResourceKind::Confession, None, caller, Action::ListAll)?;
        Ok(self.repo.list(ConfessionFilter::default()).await?)
    }

    /// Any authenticated caller may confess; the record starts unapproved.
    pub async fn create(
        &self,
        caller: &Caller,
        content: String,
        is_anonymous: bool,
    ) -> Result<Confession, Error> {
        authorize(ResourceKind::Confession, None, caller, Action::Create)?;
        let confession = Confession::new(content, is_anonymous, caller.id, Utc::now())?;
        Ok(self.repo.insert(confession).await?)
    }

    /// Flip the caller's like. No role restriction.
    pub async fn toggle_like(&self, caller: &Caller, id: Uuid) -> Result<Confession, Error> {
        self.repo
            .toggle_like(id, caller.id)
            .await?
            .ok_or_else(not_found)
    }

    /// Admit a confession to the public feed. Admin only, idempotent.
    pub async fn approve(&self, caller: &Caller, id: Uuid) -> Result<Confession, Error> {
        authorize(ResourceKind::Confession, None, caller, Action::Approve)?;
        self.repo
            .set_approved(id, true)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let confession = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Confession,
            Some(&confession.author),
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
