//! Campus notices published by staff, ranked by priority.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::{bounded_text, optional_text, require_text};
use crate::domain::identity::CallerId;

/// Notice board sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NoticeCategory {
    Academic,
    Administrative,
    Exam,
    Holiday,
    Important,
    General,
}

impl NoticeCategory {
    pub const ALLOWED: [&'static str; 6] = [
        "Academic",
        "Administrative",
        "Exam",
        "Holiday",
        "Important",
        "General",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Administrative => "Administrative",
            Self::Exam => "Exam",
            Self::Holiday => "Holiday",
            Self::Important => "Important",
            Self::General => "General",
        }
    }
}

impl std::str::FromStr for NoticeCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Academic" => Ok(Self::Academic),
            "Administrative" => Ok(Self::Administrative),
            "Exam" => Ok(Self::Exam),
            "Holiday" => Ok(Self::Holiday),
            "Important" => Ok(Self::Important),
            "General" => Ok(Self::General),
            _ => Err(()),
        }
    }
}

/// Urgency rank. Variant order defines the sort rank, `Urgent` highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum NoticePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl NoticePriority {
    pub const ALLOWED: [&'static str; 4] = ["Low", "Medium", "High", "Urgent"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl std::str::FromStr for NoticePriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Urgent" => Ok(Self::Urgent),
            _ => Err(()),
        }
    }
}

/// Who a notice is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Audience {
    All,
    Students,
    Faculty,
    Staff,
    #[serde(rename = "B.Tech")]
    BTech,
    #[serde(rename = "M.Tech")]
    MTech,
    #[serde(rename = "MBA")]
    Mba,
    #[serde(rename = "BBA")]
    Bba,
}

/// A file linked from a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Attachment {
    pub filename: String,
    pub url: String,
}

const TITLE_MAX: usize = 150;

/// A notice record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
    pub priority: NoticePriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub target_audience: Vec<Audience>,
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_till: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[schema(value_type = String)]
    pub posted_by: CallerId,
    pub created_at: DateTime<Utc>,
}

/// Validated input for publishing a notice.
#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
    pub priority: Option<NoticePriority>,
    pub department: Option<String>,
    pub target_audience: Vec<Audience>,
    pub attachments: Vec<Attachment>,
    pub valid_till: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// Fields a PUT may change.
#[derive(Debug, Clone, Default)]
pub struct NoticePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<NoticeCategory>,
    pub priority: Option<NoticePriority>,
    pub department: Option<String>,
    pub target_audience: Option<Vec<Audience>>,
    pub attachments: Option<Vec<Attachment>>,
    pub valid_till: Option<Option<DateTime<Utc>>>,
    pub is_active: Option<bool>,
}

/// How a notice listing is ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeOrder {
    /// Urgent first, ties broken newest first. The public board order.
    #[default]
    PriorityThenNewest,
    /// Plain reverse chronology, used by the staff listing.
    Newest,
}

/// Listing filter. `visible_at` set means "as seen by the public now":
/// inactive and expired notices drop out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeFilter {
    pub category: Option<NoticeCategory>,
    pub priority: Option<NoticePriority>,
    pub visible_at: Option<DateTime<Utc>>,
    pub order: NoticeOrder,
}

impl NoticeFilter {
    pub fn matches(&self, notice: &Notice) -> bool {
        let visible = match self.visible_at {
            Some(now) => notice.is_active && notice.valid_till.is_none_or(|till| till >= now),
            None => true,
        };
        visible
            && self.category.is_none_or(|c| notice.category == c)
            && self.priority.is_none_or(|p| notice.priority == p)
    }

    pub fn sort(&self, notices: &mut [Notice]) {
        match self.order {
            NoticeOrder::PriorityThenNewest => notices.sort_by(Notice::by_priority),
            NoticeOrder::Newest => notices.sort_by(Notice::newest_first),
        }
    }
}

impl Notice {
    /// Build a new notice.
    pub fn new(new: NewNotice, posted_by: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: bounded_text("title", new.title, TITLE_MAX)?,
            content: require_text("content", new.content)?,
            category: new.category,
            priority: new.priority.unwrap_or_default(),
            department: optional_text(new.department),
            target_audience: new.target_audience,
            attachments: new.attachments,
            valid_till: new.valid_till,
            is_active: new.is_active.unwrap_or(true),
            posted_by,
            created_at: now,
        })
    }

    /// Merge a patch into the record.
    pub fn apply(&mut self, patch: NoticePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(department) = patch.department {
            self.department = Some(department);
        }
        if let Some(target_audience) = patch.target_audience {
            self.target_audience = target_audience;
        }
        if let Some(attachments) = patch.attachments {
            self.attachments = attachments;
        }
        if let Some(valid_till) = patch.valid_till {
            self.valid_till = valid_till;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }

    /// Board order: highest priority first, newest within a rank.
    pub fn by_priority(a: &Self, b: &Self) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }

    /// Staff listing order: newest first.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    fn poster() -> CallerId {
        CallerId::new(Uuid::from_u128(7))
    }

    fn draft() -> NewNotice {
        NewNotice {
            title: "Semester exam schedule".into(),
            content: "Block D, 9am onwards".into(),
            category: NoticeCategory::Exam,
            priority: None,
            department: None,
            target_audience: vec![Audience::Students],
            attachments: Vec::new(),
            valid_till: None,
            is_active: None,
        }
    }

    #[test]
    fn new_applies_defaults() {
        let notice = Notice::new(draft(), poster(), Utc::now()).expect("valid notice");
        assert_eq!(notice.priority, NoticePriority::Medium);
        assert!(notice.is_active);
        assert!(notice.valid_till.is_none());
    }

    #[test]
    fn new_rejects_blank_content() {
        let err = Notice::new(
            NewNotice {
                content: "   ".into(),
                ..draft()
            },
            poster(),
            Utc::now(),
        )
        .expect_err("blank content");
        assert_eq!(err.message(), "content is required");
    }

    #[rstest]
    #[case(NoticePriority::Low, NoticePriority::Medium)]
    #[case(NoticePriority::Medium, NoticePriority::High)]
    #[case(NoticePriority::High, NoticePriority::Urgent)]
    fn priority_ranks_ascend(#[case] lower: NoticePriority, #[case] higher: NoticePriority) {
        assert!(lower < higher);
    }

    #[test]
    fn board_order_ranks_urgent_above_newer_low() {
        let now = Utc::now();
        let mut urgent = Notice::new(draft(), poster(), now - Duration::hours(2)).expect("valid");
        urgent.priority = NoticePriority::Urgent;
        let low = Notice::new(draft(), poster(), now).expect("valid");

        let mut board = vec![low.clone(), urgent.clone()];
        NoticeFilter::default().sort(&mut board);
        assert_eq!(board[0].id, urgent.id);
        assert_eq!(board[1].id, low.id);
    }

    #[test]
    fn visible_filter_drops_inactive_and_expired() {
        let now = Utc::now();
        let active = Notice::new(draft(), poster(), now).expect("valid");
        let mut inactive = Notice::new(draft(), poster(), now).expect("valid");
        inactive.is_active = false;
        let mut expired = Notice::new(draft(), poster(), now).expect("valid");
        expired.valid_till = Some(now - Duration::days(1));

        let filter = NoticeFilter {
            visible_at: Some(now),
            ..NoticeFilter::default()
        };
        assert!(filter.matches(&active));
        assert!(!filter.matches(&inactive));
        assert!(!filter.matches(&expired));
        // The staff view keeps everything.
        assert!(NoticeFilter::default().matches(&inactive));
        assert!(NoticeFilter::default().matches(&expired));
    }

    #[test]
    fn unexpired_valid_till_stays_visible() {
        let now = Utc::now();
        let mut notice = Notice::new(draft(), poster(), now).expect("valid");
        notice.valid_till = Some(now + Duration::days(3));
        let filter = NoticeFilter {
            visible_at: Some(now),
            ..NoticeFilter::default()
        };
        assert!(filter.matches(&notice));
    }

    #[test]
    fn apply_can_clear_valid_till() {
        let now = Utc::now();
        let mut notice = Notice::new(draft(), poster(), now).expect("valid");
        notice.valid_till = Some(now);
        notice.apply(NoticePatch {
            valid_till: Some(None),
            ..NoticePatch::default()
        });
        assert!(notice.valid_till.is_none());
    }

    #[test]
    fn audience_serialises_degree_labels() {
        let json = serde_json::to_value([Audience::BTech, Audience::MTech, Audience::Mba])
            .expect("serialises");
        assert_eq!(json, serde_json::json!(["B.Tech", "M.Tech", "MBA"]));
    }

    #[test]
    fn serialises_with_wire_names() {
        let notice = Notice::new(draft(), poster(), Utc::now()).expect("valid notice");
        let json = serde_json::to_value(&notice).expect("serialises");
        assert_eq!(json["targetAudience"], serde_json::json!(["Students"]));
        assert_eq!(json["isActive"], true);
        assert_eq!(json["priority"], "Medium");
        assert!(json.get("validTill").is_none());
    }
}
