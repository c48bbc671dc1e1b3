//! Campus events with a schedule-ordered public listing.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::{bounded_text, optional_text, require_text};
use crate::domain::identity::CallerId;

/// Event programme categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventCategory {
    Cultural,
    Technical,
    Sports,
    Academic,
    Workshop,
    Seminar,
    Competition,
    Social,
    Other,
}

impl EventCategory {
    pub const ALLOWED: [&'static str; 9] = [
        "Cultural",
        "Technical",
        "Sports",
        "Academic",
        "Workshop",
        "Seminar",
        "Competition",
        "Social",
        "Other",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cultural => "Cultural",
            Self::Technical => "Technical",
            Self::Sports => "Sports",
            Self::Academic => "Academic",
            Self::Workshop => "Workshop",
            Self::Seminar => "Seminar",
            Self::Competition => "Competition",
            Self::Social => "Social",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for EventCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cultural" => Ok(Self::Cultural),
            "Technical" => Ok(Self::Technical),
            "Sports" => Ok(Self::Sports),
            "Academic" => Ok(Self::Academic),
            "Workshop" => Ok(Self::Workshop),
            "Seminar" => Ok(Self::Seminar),
            "Competition" => Ok(Self::Competition),
            "Social" => Ok(Self::Social),
            "Other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Organizer contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

const TITLE_MAX: usize = 150;

/// An event record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub venue: String,
    pub date: DateTime<Utc>,
    /// Display times, e.g. "10:00 AM". Ties in the schedule sort fall
    /// back to lexicographic order on this field.
    pub start_time: String,
    pub end_time: String,
    pub organizer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    pub registration_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_active: bool,
    #[schema(value_type = String)]
    pub posted_by: CallerId,
    pub created_at: DateTime<Utc>,
}

/// Validated input for publishing an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub venue: String,
    pub date: DateTime<Utc>,
    pub start_time: String,
    pub end_time: String,
    pub organizer: String,
    pub contact: Option<Contact>,
    pub registration_required: Option<bool>,
    pub registration_link: Option<String>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub capacity: Option<u32>,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

/// Fields a PUT may change. A present inner `None` on
/// `registration_deadline` clears the deadline.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
    pub venue: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub organizer: Option<String>,
    pub contact: Option<Contact>,
    pub registration_required: Option<bool>,
    pub registration_link: Option<String>,
    pub registration_deadline: Option<Option<DateTime<Utc>>>,
    pub capacity: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

/// How an event listing is ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventOrder {
    /// Soonest first, start time breaking date ties. The public order.
    #[default]
    Schedule,
    /// Latest date first, used by the staff listing.
    LatestDate,
}

/// Listing filter. `starting_from` keeps events on or after the given
/// instant; the public listing passes "now" unless `upcoming=false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub starting_from: Option<DateTime<Utc>>,
    pub active_only: bool,
    pub order: EventOrder,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        (!self.active_only || event.is_active)
            && self.category.is_none_or(|c| event.category == c)
            && self.starting_from.is_none_or(|from| event.date >= from)
    }

    pub fn sort(&self, events: &mut [Event]) {
        match self.order {
            EventOrder::Schedule => events.sort_by(Event::by_schedule),
            EventOrder::LatestDate => events.sort_by(Event::latest_date_first),
        }
    }
}

impl Event {
    /// Build a new event.
    pub fn new(new: NewEvent, posted_by: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: bounded_text("title", new.title, TITLE_MAX)?,
            description: require_text("description", new.description)?,
            category: new.category,
            venue: require_text("venue", new.venue)?,
            date: new.date,
            start_time: require_text("startTime", new.start_time)?,
            end_time: require_text("endTime", new.end_time)?,
            organizer: require_text("organizer", new.organizer)?,
            contact: new.contact,
            registration_required: new.registration_required.unwrap_or(false),
            registration_link: optional_text(new.registration_link),
            registration_deadline: new.registration_deadline,
            capacity: new.capacity,
            tags: trim_tags(new.tags),
            image: optional_text(new.image),
            is_active: new.is_active.unwrap_or(true),
            posted_by,
            created_at: now,
        })
    }

    /// Merge a patch into the record.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(venue) = patch.venue {
            self.venue = venue;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(organizer) = patch.organizer {
            self.organizer = organizer;
        }
        if let Some(contact) = patch.contact {
            self.contact = Some(contact);
        }
        if let Some(required) = patch.registration_required {
            self.registration_required = required;
        }
        if let Some(link) = patch.registration_link {
            self.registration_link = Some(link);
        }
        if let Some(deadline) = patch.registration_deadline {
            self.registration_deadline = deadline;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = Some(capacity);
        }
        if let Some(tags) = patch.tags {
            self.tags = trim_tags(tags);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }

    /// Public order: soonest date first, start time within a day.
    pub fn by_schedule(a: &Self, b: &Self) -> Ordering {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    }

    /// Staff listing order: latest date first.
    pub fn latest_date_first(a: &Self, b: &Self) -> Ordering {
        b.date.cmp(&a.date)
    }
}

fn trim_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|tag| tag.trim().to_owned()).collect()
}
