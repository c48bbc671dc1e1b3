//! In-memory adapter for the forum port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::forum::{ForumPost, ForumPostFilter, ForumPostPatch, Reply};
use crate::domain::identity::CallerId;
use crate::domain::ports::{ForumRepository, StoreError};
use crate::domain::votes;

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryForumRepository {
    records: MemoryCollection<ForumPost>,
}

impl MemoryForumRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ForumRepository for MemoryForumRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: ForumPostFilter) -> Result<Vec<ForumPost>, StoreError> {
        let mut posts = self.records.filtered(|post| filter.matches(post)).await;
        filter.sort(&mut posts);
        Ok(posts)
    }

    async fn insert(&self, post: ForumPost) -> Result<ForumPost, StoreError> {
        Ok(self.records.insert(post.id, post).await)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ForumPostPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.records.mutate(id, |post| post.apply(patch, now)).await)
    }

    async fn record_view(&self, id: Uuid) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.records.mutate(id, ForumPost::record_view).await)
    }

    async fn add_reply(&self, id: Uuid, reply: Reply) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.records.mutate(id, |post| post.add_reply(reply)).await)
    }

    async fn toggle_upvote(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<ForumPost>, StoreError> {
        Ok(self
            .records
            .mutate(id, |post| {
                votes::toggle(post, caller);
            })
            .await)
    }

    async fn toggle_solved(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<ForumPost>, StoreError> {
        Ok(self.records.mutate(id, |post| post.toggle_solved(now)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forum::{ForumCategory, ForumOrder, NewForumPost};
    use chrono::Duration;

    fn author() -> CallerId {
        CallerId::new(Uuid::from_u128(3))
    }

    fn post(title: &str, at: DateTime<Utc>) -> ForumPost {
        ForumPost::new(
            NewForumPost {
                title: title.into(),
                content: "Looking for pointers".into(),
                category: ForumCategory::Academic,
                tags: Vec::new(),
            },
            author(),
            at,
        )
        .expect("valid post")
    }

    #[tokio::test]
    async fn views_accumulate_without_touching_updated_at() {
        let repo = MemoryForumRepository::new();
        let stored = repo.insert(post("Course picks", Utc::now())).await.expect("insert");

        repo.record_view(stored.id).await.expect("view");
        let viewed = repo
            .record_view(stored.id)
            .await
            .expect("view")
            .expect("record exists");
        assert_eq!(viewed.views, 2);
        assert_eq!(viewed.updated_at, stored.updated_at);
    }

    #[tokio::test]
    async fn replies_bump_updated_at_to_the_reply_time() {
        let repo = MemoryForumRepository::new();
        let opened = Utc::now();
        let stored = repo.insert(post("Lab partners", opened)).await.expect("insert");
        let replied = opened + Duration::hours(1);
        let reply =
            Reply::new("Count me in".into(), CallerId::new(Uuid::from_u128(4)), replied)
                .expect("valid reply");

        let updated = repo
            .add_reply(stored.id, reply)
            .await
            .expect("reply")
            .expect("record exists");
        assert_eq!(updated.replies.len(), 1);
        assert_eq!(updated.updated_at, replied);
    }

    #[tokio::test]
    async fn popular_order_follows_upvotes() {
        let repo = MemoryForumRepository::new();
        let now = Utc::now();
        let quiet = repo.insert(post("Quiet one", now)).await.expect("insert");
        let hot = repo
            .insert(post("Hot one", now - Duration::hours(1)))
            .await
            .expect("insert");
        repo.toggle_upvote(hot.id, CallerId::new(Uuid::from_u128(9)))
            .await
            .expect("upvote");

        let feed = repo
            .list(ForumPostFilter {
                order: ForumOrder::Popular,
                ..ForumPostFilter::default()
            })
            .await
            .expect("list");
        assert_eq!(feed[0].id, hot.id);
        assert_eq!(feed[1].id, quiet.id);
    }

    #[tokio::test]
    async fn solved_toggle_flips_both_ways() {
        let repo = MemoryForumRepository::new();
        let stored = repo.insert(post("Wifi fix", Utc::now())).await.expect("insert");

        let solved = repo
            .toggle_solved(stored.id, Utc::now())
            .await
            .expect("toggle")
            .expect("record exists");
        assert!(solved.is_solved);

        let reopened = repo
            .toggle_solved(stored.id, Utc::now())
            .await
            .expect("toggle")
            .expect("record exists");
        assert!(!reopened.is_solved);
    }
}
