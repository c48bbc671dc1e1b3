//! In-memory adapter for the notice port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notice::{Notice, NoticeFilter, NoticePatch};
use crate::domain::ports::{NoticeRepository, StoreError};

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryNoticeRepository {
    records: MemoryCollection<Notice>,
}

impl MemoryNoticeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoticeRepository for MemoryNoticeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: NoticeFilter) -> Result<Vec<Notice>, StoreError> {
        let mut notices = self.records.filtered(|notice| filter.matches(notice)).await;
        filter.sort(&mut notices);
        Ok(notices)
    }

    async fn insert(&self, notice: Notice) -> Result<Notice, StoreError> {
        Ok(self.records.insert(notice.id, notice).await)
    }

    async fn update(&self, id: Uuid, patch: NoticePatch) -> Result<Option<Notice>, StoreError> {
        Ok(self.records.mutate(id, |notice| notice.apply(patch)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::CallerId;
    use crate::domain::notice::{Audience, NewNotice, NoticeCategory, NoticeOrder, NoticePriority};
    use chrono::{Duration, Utc};

    fn notice(title: &str, priority: NoticePriority) -> Notice {
        Notice::new(
            NewNotice {
                title: title.into(),
                content: "See the admin office for details".into(),
                category: NoticeCategory::General,
                priority: Some(priority),
                department: None,
                target_audience: vec![Audience::All],
                attachments: Vec::new(),
                valid_till: None,
                is_active: None,
            },
            CallerId::new(Uuid::from_u128(1)),
            Utc::now(),
        )
        .expect("valid notice")
    }

    #[tokio::test]
    async fn public_order_ranks_urgent_above_newer_low_priority() {
        let repo = MemoryNoticeRepository::new();
        let urgent = repo
            .insert(notice("Water outage", NoticePriority::Urgent))
            .await
            .expect("insert");
        repo.insert(notice("Book sale", NoticePriority::Low))
            .await
            .expect("insert");

        let board = repo
            .list(NoticeFilter {
                visible_at: Some(Utc::now()),
                ..NoticeFilter::default()
            })
            .await
            .expect("list");
        assert_eq!(board[0].id, urgent.id);
    }

    #[tokio::test]
    async fn expired_notices_drop_off_the_public_board() {
        let repo = MemoryNoticeRepository::new();
        let stored = repo
            .insert(notice("Fee deadline", NoticePriority::High))
            .await
            .expect("insert");
        repo.update(
            stored.id,
            NoticePatch {
                valid_till: Some(Some(Utc::now() - Duration::days(1))),
                ..NoticePatch::default()
            },
        )
        .await
        .expect("update");

        let board = repo
            .list(NoticeFilter {
                visible_at: Some(Utc::now()),
                ..NoticeFilter::default()
            })
            .await
            .expect("public list");
        assert!(board.is_empty());

        let staff = repo
            .list(NoticeFilter {
                order: NoticeOrder::Newest,
                ..NoticeFilter::default()
            })
            .await
            .expect("staff list");
        assert_eq!(staff.len(), 1);
    }
}
