//! Eating spot HTTP handlers.
//!
//! ```text
//! GET    /api/eating-spots?type=&vegetarian=&priceRange=
//! POST   /api/eating-spots
//! GET    /api/eating-spots/{id}
//! PUT    /api/eating-spots/{id}
//! DELETE /api/eating-spots/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::eating_spot::{
    EatingSpot, EatingSpotFilter, EatingSpotPatch, NewEatingSpot, PriceRange, SpotType,
};
use crate::domain::fields::{bounded_rating, require_text};
use crate::domain::{Caller, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_optional_bool, parse_optional_enum, parse_path_id, require,
};

const MISSING: &str = "Eating spot not found";

/// Wire payload shared by create and update.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EatingSpotRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub spot_type: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<Vec<String>>,
    pub price_range: Option<String>,
    pub timings: Option<String>,
    pub vegetarian: Option<bool>,
    pub rating: Option<f32>,
    pub description: Option<String>,
    pub popular_items: Option<Vec<String>>,
    pub image: Option<String>,
}

/// Listing filters accepted on the public endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EatingSpotQuery {
    #[serde(rename = "type")]
    pub spot_type: Option<String>,
    pub vegetarian: Option<String>,
    pub price_range: Option<String>,
}

fn parse_filter(query: EatingSpotQuery) -> Result<EatingSpotFilter, Error> {
    Ok(EatingSpotFilter {
        spot_type: parse_optional_enum("type", query.spot_type, &SpotType::ALLOWED)?,
        vegetarian: parse_optional_bool("vegetarian", query.vegetarian)?,
        price_range: parse_optional_enum("priceRange", query.price_range, &PriceRange::ALLOWED)?,
    })
}

fn parse_new(payload: EatingSpotRequest) -> Result<NewEatingSpot, Error> {
    Ok(NewEatingSpot {
        name: require("name", payload.name)?,
        spot_type: parse_optional_enum("type", payload.spot_type, &SpotType::ALLOWED)?
            .ok_or_else(|| crate::inbound::http::validation::missing_field_error("type"))?,
        location: require("location", payload.location)?,
        cuisine: payload.cuisine.unwrap_or_default(),
        price_range: parse_optional_enum("priceRange", payload.price_range, &PriceRange::ALLOWED)?,
        timings: payload.timings,
        vegetarian: payload.vegetarian,
        rating: payload.rating,
        description: payload.description,
        popular_items: payload.popular_items.unwrap_or_default(),
        image: payload.image,
    })
}

fn parse_patch(payload: EatingSpotRequest) -> Result<EatingSpotPatch, Error> {
    Ok(EatingSpotPatch {
        name: payload.name.map(|v| require_text("name", v)).transpose()?,
        spot_type: parse_optional_enum("type", payload.spot_type, &SpotType::ALLOWED)?,
        location: payload
            .location
            .map(|v| require_text("location", v))
            .transpose()?,
        cuisine: payload.cuisine,
        price_range: parse_optional_enum("priceRange", payload.price_range, &PriceRange::ALLOWED)?,
        timings: payload.timings,
        vegetarian: payload.vegetarian,
        rating: payload
            .rating
            .map(|v| bounded_rating("rating", v, 0.0, 5.0))
            .transpose()?,
        description: payload.description,
        popular_items: payload.popular_items,
        image: payload.image,
    })
}

/// List eating spots, best rated first.
#[utoipa::path(
    get,
    path = "/api/eating-spots",
    tags = ["eating-spots"],
    operation_id = "listEatingSpots",
    params(
        ("type" = Option<String>, Query, description = "Spot type filter"),
        ("vegetarian" = Option<bool>, Query, description = "Vegetarian-only filter"),
        ("priceRange" = Option<String>, Query, description = "Price range filter")
    ),
    responses((status = 200, description = "Eating spot listing", body = [EatingSpot]))
)]
#[get("/eating-spots")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<EatingSpotQuery>,
) -> ApiResult<HttpResponse> {
    let filter = parse_filter(query.into_inner())?;
    Ok(envelope::collection_or_empty(
        state.eating_spots.list(filter).await,
    ))
}

#[utoipa::path(
    get,
    path = "/api/eating-spots/{id}",
    tags = ["eating-spots"],
    operation_id = "getEatingSpot",
    responses(
        (status = 200, description = "Eating spot", body = EatingSpot),
        (status = 404, description = "Not found")
    )
)]
#[get("/eating-spots/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.eating_spots.get(id).await?))
}

/// Create an eating spot. Admin only; names are unique.
#[utoipa::path(
    post,
    path = "/api/eating-spots",
    tags = ["eating-spots"],
    operation_id = "createEatingSpot",
    request_body = EatingSpotRequest,
    responses(
        (status = 201, description = "Created", body = EatingSpot),
        (status = 400, description = "Invalid request or duplicate name"),
        (status = 401, description = "Unauthorised"),
        (status = 403, description = "Forbidden")
    )
)]
#[post("/eating-spots")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<EatingSpotRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(
        state.eating_spots.create(&caller, new).await?,
    ))
}

/// Update an eating spot. Owner or admin.
#[utoipa::path(
    put,
    path = "/api/eating-spots/{id}",
    tags = ["eating-spots"],
    operation_id = "updateEatingSpot",
    request_body = EatingSpotRequest,
    responses(
        (status = 200, description = "Updated", body = EatingSpot),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/eating-spots/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<EatingSpotRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.eating_spots.update(&caller, id, patch).await?,
    ))
}

/// Delete an eating spot. Owner or admin.
#[utoipa::path(
    delete,
    path = "/api/eating-spots/{id}",
    tags = ["eating-spots"],
    operation_id = "deleteEatingSpot",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/eating-spots/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.eating_spots.delete(&caller, id).await?;
    Ok(envelope::deleted("Eating spot"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(fetch)
        .service(update)
        .service(remove);
}
