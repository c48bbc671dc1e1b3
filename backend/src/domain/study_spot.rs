//! Study spots curated by campus admins.
//!
//! Study spots carry no owner; the gate passes `owner = None` so only admins
//! may mutate them.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::{bounded_rating, optional_text, require_text};

/// Ambient noise classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Variable,
}

impl NoiseLevel {
    pub const ALLOWED: [&'static str; 3] = ["Quiet", "Moderate", "Variable"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Moderate => "Moderate",
            Self::Variable => "Variable",
        }
    }
}

impl std::str::FromStr for NoiseLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Quiet" => Ok(Self::Quiet),
            "Moderate" => Ok(Self::Moderate),
            "Variable" => Ok(Self::Variable),
            _ => Err(()),
        }
    }
}

/// Rough seat count bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SeatingCapacity {
    Low,
    Medium,
    High,
}

impl SeatingCapacity {
    pub const ALLOWED: [&'static str; 3] = ["Low", "Medium", "High"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::str::FromStr for SeatingCapacity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

/// A bookable-by-nobody, first-come quiet corner of campus.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudySpot {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub noise_level: NoiseLevel,
    pub wifi: bool,
    pub power_outlets: bool,
    pub seating_capacity: SeatingCapacity,
    pub rating: f32,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a study spot.
#[derive(Debug, Clone)]
pub struct NewStudySpot {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub noise_level: NoiseLevel,
    pub wifi: Option<bool>,
    pub power_outlets: Option<bool>,
    pub seating_capacity: SeatingCapacity,
    pub rating: Option<f32>,
    pub location: String,
    pub operating_hours: Option<String>,
}

/// Fields a PUT may change. Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct StudySpotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub noise_level: Option<NoiseLevel>,
    pub wifi: Option<bool>,
    pub power_outlets: Option<bool>,
    pub seating_capacity: Option<SeatingCapacity>,
    pub rating: Option<f32>,
    pub location: Option<String>,
    pub operating_hours: Option<String>,
}

impl StudySpot {
    /// Build a new record, applying defaults and validating text fields.
    pub fn new(new: NewStudySpot, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: require_text("name", new.name)?,
            description: require_text("description", new.description)?,
            image: optional_text(new.image),
            noise_level: new.noise_level,
            wifi: new.wifi.unwrap_or(false),
            power_outlets: new.power_outlets.unwrap_or(false),
            seating_capacity: new.seating_capacity,
            rating: bounded_rating("rating", new.rating.unwrap_or(0.0), 0.0, 5.0)?,
            location: require_text("location", new.location)?,
            operating_hours: optional_text(new.operating_hours),
            created_at: now,
        })
    }

    /// Merge a patch into the record. Values are validated before the patch
    /// is built, so this is a plain field merge.
    pub fn apply(&mut self, patch: StudySpotPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(noise_level) = patch.noise_level {
            self.noise_level = noise_level;
        }
        if let Some(wifi) = patch.wifi {
            self.wifi = wifi;
        }
        if let Some(power_outlets) = patch.power_outlets {
            self.power_outlets = power_outlets;
        }
        if let Some(seating_capacity) = patch.seating_capacity {
            self.seating_capacity = seating_capacity;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(operating_hours) = patch.operating_hours {
            self.operating_hours = Some(operating_hours);
        }
    }

    /// Public listing order: newest first.
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}
