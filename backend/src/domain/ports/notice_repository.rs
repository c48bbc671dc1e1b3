//! Driven port for the notice board.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notice::{Notice, NoticeFilter, NoticePatch};

use super::StoreError;

/// Port for notice storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>, StoreError>;

    /// Matching notices in the filter's order.
    async fn list(&self, filter: NoticeFilter) -> Result<Vec<Notice>, StoreError>;

    async fn insert(&self, notice: Notice) -> Result<Notice, StoreError>;

    async fn update(&self, id: Uuid, patch: NoticePatch) -> Result<Option<Notice>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
