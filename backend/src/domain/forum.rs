//! Discussion forum posts with replies, view counts and upvotes.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::{bounded_text, require_text};
use crate::domain::identity::CallerId;
use crate::domain::votes::Votable;

/// Forum boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ForumCategory {
    Academic,
    Career,
    #[serde(rename = "Campus Life")]
    CampusLife,
    Events,
    Housing,
    General,
    #[serde(rename = "Tech Help")]
    TechHelp,
}

impl ForumCategory {
    pub const ALLOWED: [&'static str; 7] = [
        "Academic",
        "Career",
        "Campus Life",
        "Events",
        "Housing",
        "General",
        "Tech Help",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Career => "Career",
            Self::CampusLife => "Campus Life",
            Self::Events => "Events",
            Self::Housing => "Housing",
            Self::General => "General",
            Self::TechHelp => "Tech Help",
        }
    }
}

impl std::str::FromStr for ForumCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Academic" => Ok(Self::Academic),
            "Career" => Ok(Self::Career),
            "Campus Life" => Ok(Self::CampusLife),
            "Events" => Ok(Self::Events),
            "Housing" => Ok(Self::Housing),
            "General" => Ok(Self::General),
            "Tech Help" => Ok(Self::TechHelp),
            _ => Err(()),
        }
    }
}

/// A reply nested under a post.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
    #[schema(value_type = String)]
    pub author: CallerId,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn new(content: String, author: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            content: require_text("content", content)?,
            author,
            created_at: now,
        })
    }
}

const TITLE_MAX: usize = 150;

/// A forum post record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    #[schema(value_type = String)]
    pub author: CallerId,
    pub replies: Vec<Reply>,
    pub views: u32,
    pub upvotes: u32,
    #[schema(value_type = Vec<String>)]
    pub upvoted_by: Vec<CallerId>,
    pub tags: Vec<String>,
    pub is_solved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for opening a post.
#[derive(Debug, Clone)]
pub struct NewForumPost {
    pub title: String,
    pub content: String,
    pub category: ForumCategory,
    pub tags: Vec<String>,
}

/// Fields a PUT may change.
#[derive(Debug, Clone, Default)]
pub struct ForumPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<ForumCategory>,
    pub tags: Option<Vec<String>>,
}

/// How a post listing is ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForumOrder {
    /// Reverse chronology, the default feed.
    #[default]
    Newest,
    /// Most upvoted first.
    Popular,
    /// Most viewed first.
    MostViewed,
}

/// Listing filter for the public feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForumPostFilter {
    pub category: Option<ForumCategory>,
    pub order: ForumOrder,
}

impl ForumPostFilter {
    pub fn matches(&self, post: &ForumPost) -> bool {
        self.category.is_none_or(|c| post.category == c)
    }

    pub fn sort(&self, posts: &mut [ForumPost]) {
        match self.order {
            ForumOrder::Newest => posts.sort_by(ForumPost::newest_first),
            ForumOrder::Popular => posts.sort_by(ForumPost::most_upvoted_first),
            ForumOrder::MostViewed => posts.sort_by(ForumPost::most_viewed_first),
        }
    }
}

impl ForumPost {
    /// Open a new post.
    pub fn new(new: NewForumPost, author: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: bounded_text("title", new.title, TITLE_MAX)?,
            content: require_text("content", new.content)?,
            category: new.category,
            author,
            replies: Vec::new(),
            views: 0,
            upvotes: 0,
            upvoted_by: Vec::new(),
            tags: trim_tags(new.tags),
            is_solved: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge a patch and bump `updated_at`.
    pub fn apply(&mut self, patch: ForumPostPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = trim_tags(tags);
        }
        self.updated_at = now;
    }

    /// Append a reply; the reply's timestamp becomes the post's
    /// `updated_at`.
    pub fn add_reply(&mut self, reply: Reply) {
        self.updated_at = reply.created_at;
        self.replies.push(reply);
    }

    /// Flip the solved marker and bump `updated_at`.
    pub fn toggle_solved(&mut self, now: DateTime<Utc>) {
        self.is_solved = !self.is_solved;
        self.updated_at = now;
    }

    /// Count one view. Views do not touch `updated_at`.
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }

    /// Upvote count descending, newest breaking ties.
    pub fn most_upvoted_first(a: &Self, b: &Self) -> Ordering {
        b.upvotes
            .cmp(&a.upvotes)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }

    /// View count descending, newest breaking ties.
    pub fn most_viewed_first(a: &Self, b: &Self) -> Ordering {
        b.views
            .cmp(&a.views)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

impl Votable for ForumPost {
    fn voters(&self) -> &[CallerId] {
        &self.upvoted_by
    }

    fn voters_mut(&mut self) -> &mut Vec<CallerId> {
        &mut self.upvoted_by
    }

    fn vote_count(&self) -> u32 {
        self.upvotes
    }

    fn set_vote_count(&mut self, count: u32) {
        self.upvotes = count;
    }
}

fn trim_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|tag| tag.trim().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::votes::toggle;
    use chrono::Duration;
    use rstest::rstest;

    fn author() -> CallerId {
        CallerId::new(Uuid::from_u128(3))
    }

    fn draft() -> NewForumPost {
        NewForumPost {
            title: "Where to print posters cheaply?".into(),
            content: "Need A2 prints by Friday".into(),
            category: ForumCategory::CampusLife,
            tags: vec![" printing ".into()],
        }
    }

    fn post_at(now: DateTime<Utc>) -> ForumPost {
        ForumPost::new(draft(), author(), now).expect("valid post")
    }

    #[test]
    fn new_starts_unsolved_with_zero_counters() {
        let now = Utc::now();
        let post = post_at(now);
        assert!(!post.is_solved);
        assert_eq!(post.views, 0);
        assert_eq!(post.upvotes, 0);
        assert!(post.replies.is_empty());
        assert_eq!(post.updated_at, post.created_at);
        assert_eq!(post.tags, vec!["printing".to_owned()]);
    }

    #[rstest]
    #[case("Campus Life", ForumCategory::CampusLife)]
    #[case("Tech Help", ForumCategory::TechHelp)]
    #[case("Academic", ForumCategory::Academic)]
    fn category_labels_round_trip(#[case] label: &str, #[case] expected: ForumCategory) {
        let parsed: ForumCategory = label.parse().expect("known label");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), label);
    }

    #[test]
    fn add_reply_sets_updated_at_to_reply_time() {
        let opened = Utc::now();
        let mut post = post_at(opened);
        let replied = opened + Duration::minutes(30);
        let reply = Reply::new("Try the stationery near gate 2".into(), author(), replied)
            .expect("valid reply");
        post.add_reply(reply);
        assert_eq!(post.replies.len(), 1);
        assert_eq!(post.updated_at, replied);
        assert_eq!(post.created_at, opened);
    }

    #[test]
    fn reply_requires_content() {
        let err = Reply::new("  ".into(), author(), Utc::now()).expect_err("blank reply");
        assert_eq!(err.message(), "content is required");
    }

    #[test]
    fn toggle_solved_flips_both_ways() {
        let now = Utc::now();
        let mut post = post_at(now);
        post.toggle_solved(now + Duration::minutes(1));
        assert!(post.is_solved);
        post.toggle_solved(now + Duration::minutes(2));
        assert!(!post.is_solved);
        assert_eq!(post.updated_at, now + Duration::minutes(2));
    }

    #[test]
    fn record_view_leaves_updated_at_alone() {
        let now = Utc::now();
        let mut post = post_at(now);
        post.record_view();
        post.record_view();
        assert_eq!(post.views, 2);
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn upvote_toggle_restores_the_exact_record() {
        let mut post = post_at(Utc::now());
        let before = post.clone();
        let voter = CallerId::new(Uuid::from_u128(42));
        toggle(&mut post, voter);
        assert_eq!(post.upvotes, 1);
        toggle(&mut post, voter);
        assert_eq!(post, before);
    }

    #[test]
    fn popular_order_ranks_by_upvotes_then_recency() {
        let now = Utc::now();
        let mut liked = post_at(now - Duration::hours(1));
        toggle(&mut liked, CallerId::new(Uuid::from_u128(1)));
        let newer = post_at(now);
        let older = post_at(now - Duration::hours(2));

        let mut feed = vec![older.clone(), newer.clone(), liked.clone()];
        ForumPostFilter {
            order: ForumOrder::Popular,
            ..ForumPostFilter::default()
        }
        .sort(&mut feed);
        assert_eq!(feed[0].id, liked.id);
        assert_eq!(feed[1].id, newer.id);
        assert_eq!(feed[2].id, older.id);
    }

    #[test]
    fn most_viewed_order_ranks_by_views() {
        let now = Utc::now();
        let mut seen = post_at(now - Duration::hours(1));
        seen.record_view();
        let fresh = post_at(now);

        let mut feed = vec![fresh.clone(), seen.clone()];
        ForumPostFilter {
            order: ForumOrder::MostViewed,
            ..ForumPostFilter::default()
        }
        .sort(&mut feed);
        assert_eq!(feed[0].id, seen.id);
    }

    #[test]
    fn filter_matches_category() {
        let post = post_at(Utc::now());
        let same = ForumPostFilter {
            category: Some(ForumCategory::CampusLife),
            ..ForumPostFilter::default()
        };
        let other = ForumPostFilter {
            category: Some(ForumCategory::Career),
            ..ForumPostFilter::default()
        };
        assert!(same.matches(&post));
        assert!(!other.matches(&post));
    }

    #[test]
    fn serialises_with_wire_names() {
        let post = post_at(Utc::now());
        let json = serde_json::to_value(&post).expect("serialises");
        assert_eq!(json["isSolved"], false);
        assert_eq!(json["upvotedBy"], serde_json::json!([]));
        assert_eq!(json["category"], "Campus Life");
        assert!(json.get("updatedAt").is_some());
    }
}
