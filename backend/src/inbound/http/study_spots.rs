//! Study spot HTTP handlers.
//!
//! ```text
//! GET    /api/study-spots
//! POST   /api/study-spots
//! GET    /api/study-spots/{id}
//! PUT    /api/study-spots/{id}
//! DELETE /api/study-spots/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::study_spot::{
    NewStudySpot, NoiseLevel, SeatingCapacity, StudySpot, StudySpotPatch,
};
use crate::domain::{Caller, Error};
use crate::domain::fields::{bounded_rating, require_text};
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_enum, parse_optional_enum, parse_path_id, require};
use crate::inbound::http::ApiResult;

const MISSING: &str = "Study spot not found";

/// Wire payload shared by create and update; every field optional so the
/// same shape parses into either a full record or a patch.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudySpotRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub noise_level: Option<String>,
    pub wifi: Option<bool>,
    pub power_outlets: Option<bool>,
    pub seating_capacity: Option<String>,
    pub rating: Option<f32>,
    pub location: Option<String>,
    pub operating_hours: Option<String>,
}

fn parse_new(payload: StudySpotRequest) -> Result<NewStudySpot, Error> {
    Ok(NewStudySpot {
        name: require("name", payload.name)?,
        description: require("description", payload.description)?,
        image: payload.image,
        noise_level: parse_enum(
            "noiseLevel",
            require("noiseLevel", payload.noise_level)?,
            &NoiseLevel::ALLOWED,
        )?,
        wifi: payload.wifi,
        power_outlets: payload.power_outlets,
        seating_capacity: parse_enum(
            "seatingCapacity",
            require("seatingCapacity", payload.seating_capacity)?,
            &SeatingCapacity::ALLOWED,
        )?,
        rating: payload.rating,
        location: require("location", payload.location)?,
        operating_hours: payload.operating_hours,
    })
}

fn parse_patch(payload: StudySpotRequest) -> Result<StudySpotPatch, Error> {
    Ok(StudySpotPatch {
        name: payload.name.map(|v| require_text("name", v)).transpose()?,
        description: payload
            .description
            .map(|v| require_text("description", v))
            .transpose()?,
        image: payload.image,
        noise_level: parse_optional_enum("noiseLevel", payload.noise_level, &NoiseLevel::ALLOWED)?,
        wifi: payload.wifi,
        power_outlets: payload.power_outlets,
        seating_capacity: parse_optional_enum(
            "seatingCapacity",
            payload.seating_capacity,
            &SeatingCapacity::ALLOWED,
        )?,
        rating: payload
            .rating
            .map(|v| bounded_rating("rating", v, 0.0, 5.0))
            .transpose()?,
        location: payload
            .location
            .map(|v| require_text("location", v))
            .transpose()?,
        operating_hours: payload.operating_hours,
    })
}

/// List every study spot, newest first.
#[utoipa::path(
    get,
    path = "/api/study-spots",
    tags = ["study-spots"],
    operation_id = "listStudySpots",
    responses((status = 200, description = "Study spot listing", body = [StudySpot]))
)]
#[get("/study-spots")]
pub async fn list(state: web::Data<HttpState>) -> HttpResponse {
    envelope::collection_or_empty(state.study_spots.list().await)
}

#[utoipa::path(
    get,
    path = "/api/study-spots/{id}",
    tags = ["study-spots"],
    operation_id = "getStudySpot",
    responses(
        (status = 200, description = "Study spot", body = StudySpot),
        (status = 404, description = "Not found")
    )
)]
#[get("/study-spots/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.study_spots.get(id).await?))
}

/// Create a study spot. Admin only.
#[utoipa::path(
    post,
    path = "/api/study-spots",
    tags = ["study-spots"],
    operation_id = "createStudySpot",
    request_body = StudySpotRequest,
    responses(
        (status = 201, description = "Created", body = StudySpot),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorised"),
        (status = 403, description = "Forbidden")
    )
)]
#[post("/study-spots")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<StudySpotRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(
        state.study_spots.create(&caller, new).await?,
    ))
}

/// Update a study spot. Admin only (spots carry no owner).
#[utoipa::path(
    put,
    path = "/api/study-spots/{id}",
    tags = ["study-spots"],
    operation_id = "updateStudySpot",
    request_body = StudySpotRequest,
    responses(
        (status = 200, description = "Updated", body = StudySpot),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/study-spots/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<StudySpotRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.study_spots.update(&caller, id, patch).await?,
    ))
}

/// Delete a study spot. Admin only. The success envelope carries an empty
/// data object for this family.
#[utoipa::path(
    delete,
    path = "/api/study-spots/{id}",
    tags = ["study-spots"],
    operation_id = "deleteStudySpot",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/study-spots/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.study_spots.delete(&caller, id).await?;
    Ok(envelope::deleted_empty())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(fetch)
        .service(update)
        .service(remove);
}
