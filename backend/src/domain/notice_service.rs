//! Notice board service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::error::Error;
use crate::domain::identity::Caller;
use crate::domain::notice::{
    NewNotice, Notice, NoticeCategory, NoticeFilter, NoticeOrder, NoticePatch, NoticePriority,
};
use crate::domain::ports::NoticeRepository;

fn not_found() -> Error {
    Error::not_found("Notice not found")
}

/// Orchestrates gate checks and store calls for notices.
#[derive(Clone)]
pub struct NoticeService {
    repo: Arc<dyn NoticeRepository>,
}

impl NoticeService {
    pub fn new(repo: Arc<dyn NoticeRepository>) -> Self {
        Self { repo }
    }

    /// The public board: active, unexpired notices ranked by priority.
    pub async fn list_public(
        &self,
        category: Option<NoticeCategory>,
        priority: Option<NoticePriority>,
    ) -> Result<Vec<Notice>, Error> {
        Ok(self
            .repo
            .list(NoticeFilter {
                category,
                priority,
                visible_at: Some(Utc::now()),
                order: NoticeOrder::PriorityThenNewest,
            })
            .await?)
    }

    /// The staff view: every notice, newest first. Admin or faculty.
    pub async fn list_all(&self, caller: &Caller) -> Result<Vec<Notice>, Error> {
        authorize(ResourceKind::Notice, None, caller, Action::ListAll)?;
        Ok(self
            .repo
            .list(NoticeFilter {
                order: NoticeOrder::Newest,
                ..NoticeFilter::default()
            })
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Notice, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, caller: &Caller, new: NewNotice) -> Result<Notice, Error> {
        authorize(ResourceKind::Notice, None, caller, Action::Create)?;
        let notice = Notice::new(new, caller.id, Utc::now())?;
        Ok(self.repo.insert(notice).await?)
    }

    /// Owner, admin, or faculty may update a notice.
    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: NoticePatch,
    ) -> Result<Notice, Error> {
        let notice = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Notice,
            Some(&notice.posted_by),
            caller,
            Action::Update,
        )?;
        self.repo.update(id, patch).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let notice = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Notice,
            Some(&notice.posted_by),
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
