//! Campus facility reviews with a "helpful" vote pair.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::bounded_text;
use crate::domain::identity::CallerId;
use crate::domain::votes::Votable;

/// What the review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReviewCategory {
    Food,
    Hostel,
    Library,
    Gym,
    Academics,
    Campus,
    Other,
}

impl ReviewCategory {
    pub const ALLOWED: [&'static str; 7] = [
        "Food",
        "Hostel",
        "Library",
        "Gym",
        "Academics",
        "Campus",
        "Other",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Hostel => "Hostel",
            Self::Library => "Library",
            Self::Gym => "Gym",
            Self::Academics => "Academics",
            Self::Campus => "Campus",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for ReviewCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food" => Ok(Self::Food),
            "Hostel" => Ok(Self::Hostel),
            "Library" => Ok(Self::Library),
            "Gym" => Ok(Self::Gym),
            "Academics" => Ok(Self::Academics),
            "Campus" => Ok(Self::Campus),
            "Other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

const TITLE_MAX: usize = 100;
const CONTENT_MAX: usize = 1000;

/// A review record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub category: ReviewCategory,
    pub title: String,
    pub content: String,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    #[schema(value_type = String)]
    pub author: CallerId,
    pub helpful: u32,
    #[schema(value_type = Vec<String>)]
    pub helpful_by: Vec<CallerId>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub category: ReviewCategory,
    pub title: String,
    pub content: String,
    pub rating: u8,
}

/// Fields a PUT may change.
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub category: Option<ReviewCategory>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
}

/// Listing filters accepted by the public endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub category: Option<ReviewCategory>,
    pub rating: Option<u8>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        self.category.is_none_or(|c| review.category == c)
            && self.rating.is_none_or(|r| review.rating == r)
    }
}

/// Validate a star rating.
pub(crate) fn validate_rating(rating: u8) -> Result<u8, Error> {
    if !(1..=5).contains(&rating) {
        return Err(
            Error::invalid_request("rating must be between 1 and 5")
                .with_details(json!({ "field": "rating", "code": "range", "min": 1, "max": 5 })),
        );
    }
    Ok(rating)
}

impl Review {
    /// Build a new review.
    pub fn new(new: NewReview, author: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            category: new.category,
            title: bounded_text("title", new.title, TITLE_MAX)?,
            content: bounded_text("content", new.content, CONTENT_MAX)?,
            rating: validate_rating(new.rating)?,
            author,
            helpful: 0,
            helpful_by: Vec::new(),
            created_at: now,
        })
    }

    /// Merge a patch into the record.
    pub fn apply(&mut self, patch: ReviewPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }

    /// Feed order: newest first.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

impl Votable for Review {
    fn voters(&self) -> &[CallerId] {
        &self.helpful_by
    }

    fn voters_mut(&mut self) -> &mut Vec<CallerId> {
        &mut self.helpful_by
    }

    fn vote_count(&self) -> u32 {
        self.helpful
    }

    fn set_vote_count(&mut self, count: u32) {
        self.helpful = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn author() -> CallerId {
        CallerId::new(Uuid::from_u128(1))
    }

    fn draft() -> NewReview {
        NewReview {
            category: ReviewCategory::Food,
            title: "Mess food review".into(),
            content: "Dal was actually good this week".into(),
            rating: 4,
        }
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn new_rejects_out_of_range_ratings(#[case] rating: u8) {
        let err = Review::new(NewReview { rating, ..draft() }, author(), Utc::now())
            .expect_err("invalid rating");
        assert_eq!(err.message(), "rating must be between 1 and 5");
    }

    #[test]
    fn new_enforces_title_limit() {
        let err = Review::new(
            NewReview {
                title: "x".repeat(101),
                ..draft()
            },
            author(),
            Utc::now(),
        )
        .expect_err("title too long");
        assert_eq!(err.message(), "title cannot exceed 100 characters");
    }

    #[rstest]
    #[case(ReviewFilter::default(), true)]
    #[case(ReviewFilter { category: Some(ReviewCategory::Food), rating: None }, true)]
    #[case(ReviewFilter { category: Some(ReviewCategory::Gym), rating: None }, false)]
    #[case(ReviewFilter { category: None, rating: Some(4) }, true)]
    #[case(ReviewFilter { category: None, rating: Some(5) }, false)]
    fn filter_matches_category_and_exact_rating(#[case] filter: ReviewFilter, #[case] expected: bool) {
        let review = Review::new(draft(), author(), Utc::now()).expect("valid review");
        assert_eq!(filter.matches(&review), expected);
    }

    #[test]
    fn apply_updates_only_present_fields() {
        let mut review = Review::new(draft(), author(), Utc::now()).expect("valid review");
        review.apply(ReviewPatch {
            rating: Some(2),
            ..ReviewPatch::default()
        });
        assert_eq!(review.rating, 2);
        assert_eq!(review.title, "Mess food review");
    }

    #[test]
    fn serialises_helpful_pair_with_wire_names() {
        let review = Review::new(draft(), author(), Utc::now()).expect("valid review");
        let json = serde_json::to_value(&review).expect("serialises");
        assert_eq!(json["helpful"], 0);
        assert_eq!(json["helpfulBy"], serde_json::json!([]));
        assert_eq!(json["category"], "Food");
    }
}
