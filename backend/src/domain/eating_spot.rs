//! Eating spots: canteens, cafes and everything else that feeds campus.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::fields::{bounded_rating, optional_bounded_text, optional_text, require_text};
use crate::domain::identity::CallerId;

/// Venue classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SpotType {
    Canteen,
    Cafe,
    Restaurant,
    #[serde(rename = "Food Court")]
    FoodCourt,
    Mess,
    Other,
}

impl SpotType {
    pub const ALLOWED: [&'static str; 6] =
        ["Canteen", "Cafe", "Restaurant", "Food Court", "Mess", "Other"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Canteen => "Canteen",
            Self::Cafe => "Cafe",
            Self::Restaurant => "Restaurant",
            Self::FoodCourt => "Food Court",
            Self::Mess => "Mess",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for SpotType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Canteen" => Ok(Self::Canteen),
            "Cafe" => Ok(Self::Cafe),
            "Restaurant" => Ok(Self::Restaurant),
            "Food Court" => Ok(Self::FoodCourt),
            "Mess" => Ok(Self::Mess),
            "Other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Price band in rupee glyphs, as printed on the menu board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PriceRange {
    #[serde(rename = "₹")]
    Budget,
    #[default]
    #[serde(rename = "₹₹")]
    Moderate,
    #[serde(rename = "₹₹₹")]
    Premium,
}

impl PriceRange {
    pub const ALLOWED: [&'static str; 3] = ["₹", "₹₹", "₹₹₹"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "₹",
            Self::Moderate => "₹₹",
            Self::Premium => "₹₹₹",
        }
    }
}

impl std::str::FromStr for PriceRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "₹" => Ok(Self::Budget),
            "₹₹" => Ok(Self::Moderate),
            "₹₹₹" => Ok(Self::Premium),
            _ => Err(()),
        }
    }
}

/// An eating spot record. Names are unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EatingSpot {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    pub location: String,
    pub cuisine: Vec<String>,
    pub price_range: PriceRange,
    pub timings: String,
    pub vegetarian: bool,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub popular_items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[schema(value_type = String)]
    pub added_by: CallerId,
    pub created_at: DateTime<Utc>,
}

/// Opening hours used when the draft leaves them out.
pub const DEFAULT_TIMINGS: &str = "9:00 AM - 9:00 PM";

const DESCRIPTION_MAX: usize = 500;

/// Validated input for creating an eating spot.
#[derive(Debug, Clone)]
pub struct NewEatingSpot {
    pub name: String,
    pub spot_type: SpotType,
    pub location: String,
    pub cuisine: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub timings: Option<String>,
    pub vegetarian: Option<bool>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub popular_items: Vec<String>,
    pub image: Option<String>,
}

/// Fields a PUT may change.
#[derive(Debug, Clone, Default)]
pub struct EatingSpotPatch {
    pub name: Option<String>,
    pub spot_type: Option<SpotType>,
    pub location: Option<String>,
    pub cuisine: Option<Vec<String>>,
    pub price_range: Option<PriceRange>,
    pub timings: Option<String>,
    pub vegetarian: Option<bool>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub popular_items: Option<Vec<String>>,
    pub image: Option<String>,
}

/// Listing filters accepted by the public endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EatingSpotFilter {
    pub spot_type: Option<SpotType>,
    pub vegetarian: Option<bool>,
    pub price_range: Option<PriceRange>,
}

impl EatingSpotFilter {
    pub fn matches(&self, spot: &EatingSpot) -> bool {
        self.spot_type.is_none_or(|t| spot.spot_type == t)
            && self.vegetarian.is_none_or(|v| spot.vegetarian == v)
            && self.price_range.is_none_or(|p| spot.price_range == p)
    }
}

impl EatingSpot {
    /// Build a new record, applying defaults and validating text fields.
    pub fn new(new: NewEatingSpot, added_by: CallerId, now: DateTime<Utc>) -> Result<Self, Error> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: require_text("name", new.name)?,
            spot_type: new.spot_type,
            location: require_text("location", new.location)?,
            cuisine: new.cuisine,
            price_range: new.price_range.unwrap_or_default(),
            timings: new.timings.unwrap_or_else(|| DEFAULT_TIMINGS.to_owned()),
            vegetarian: new.vegetarian.unwrap_or(false),
            rating: bounded_rating("rating", new.rating.unwrap_or(0.0), 0.0, 5.0)?,
            description: optional_bounded_text("description", new.description, DESCRIPTION_MAX)?,
            popular_items: new.popular_items,
            image: optional_text(new.image),
            added_by,
            created_at: now,
        })
    }

    /// Merge a patch into the record.
    pub fn apply(&mut self, patch: EatingSpotPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(spot_type) = patch.spot_type {
            self.spot_type = spot_type;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(cuisine) = patch.cuisine {
            self.cuisine = cuisine;
        }
        if let Some(price_range) = patch.price_range {
            self.price_range = price_range;
        }
        if let Some(timings) = patch.timings {
            self.timings = timings;
        }
        if let Some(vegetarian) = patch.vegetarian {
            self.vegetarian = vegetarian;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(popular_items) = patch.popular_items {
            self.popular_items = popular_items;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }

    /// Listing order: best rated first, oldest breaking ties.
    pub fn top_rated(a: &Self, b: &Self) -> Ordering {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then(a.created_at.cmp(&b.created_at))
    }
}
