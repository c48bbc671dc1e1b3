//! Review HTTP handlers.
//!
//! ```text
//! GET    /api/reviews?category=&rating=
//! POST   /api/reviews
//! GET    /api/reviews/{id}
//! PUT    /api/reviews/{id}
//! PUT    /api/reviews/{id}/helpful
//! DELETE /api/reviews/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::review::{
    NewReview, Review, ReviewCategory, ReviewFilter, ReviewPatch, validate_rating,
};
use crate::domain::fields::require_text;
use crate::domain::{Caller, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_optional_enum, parse_path_id, require,
};

const MISSING: &str = "Review not found";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub category: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub category: Option<String>,
    pub rating: Option<String>,
}

fn parse_filter_rating(value: Option<String>) -> Result<Option<u8>, Error> {
    value
        .map(|raw| {
            raw.parse::<u8>()
                .map_err(|_| bad_rating(&raw))
                .and_then(|rating| validate_rating(rating).map_err(|_| bad_rating(&raw)))
        })
        .transpose()
}

fn bad_rating(raw: &str) -> Error {
    Error::invalid_request("rating must be a whole number between 1 and 5").with_details(json!({
        "field": "rating",
        "value": raw,
        "code": "range",
    }))
}

fn parse_new(payload: ReviewRequest) -> Result<NewReview, Error> {
    Ok(NewReview {
        category: parse_optional_enum("category", payload.category, &ReviewCategory::ALLOWED)?
            .ok_or_else(|| crate::inbound::http::validation::missing_field_error("category"))?,
        title: require("title", payload.title)?,
        content: require("content", payload.content)?,
        rating: require("rating", payload.rating)?,
    })
}

fn parse_patch(payload: ReviewRequest) -> Result<ReviewPatch, Error> {
    Ok(ReviewPatch {
        category: parse_optional_enum("category", payload.category, &ReviewCategory::ALLOWED)?,
        title: payload.title.map(|v| require_text("title", v)).transpose()?,
        content: payload
            .content
            .map(|v| require_text("content", v))
            .transpose()?,
        rating: payload.rating.map(validate_rating).transpose()?,
    })
}

/// List reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tags = ["reviews"],
    operation_id = "listReviews",
    params(
        ("category" = Option<String>, Query, description = "Category filter"),
        ("rating" = Option<u8>, Query, description = "Exact star rating filter")
    ),
    responses((status = 200, description = "Review listing", body = [Review]))
)]
#[get("/reviews")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<ReviewQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = ReviewFilter {
        category: parse_optional_enum("category", query.category, &ReviewCategory::ALLOWED)?,
        rating: parse_filter_rating(query.rating)?,
    };
    Ok(envelope::collection_or_empty(
        state.reviews.list(filter).await,
    ))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tags = ["reviews"],
    operation_id = "getReview",
    responses(
        (status = 200, description = "Review", body = Review),
        (status = 404, description = "Not found")
    )
)]
#[get("/reviews/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.reviews.get(id).await?))
}

/// Create a review. Any authenticated caller.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tags = ["reviews"],
    operation_id = "createReview",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Created", body = Review),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorised")
    )
)]
#[post("/reviews")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(state.reviews.create(&caller, new).await?))
}

/// Update a review. Author or admin.
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tags = ["reviews"],
    operation_id = "updateReview",
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Updated", body = Review),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/reviews/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.reviews.update(&caller, id, patch).await?,
    ))
}

/// Toggle the caller's helpful mark.
#[utoipa::path(
    put,
    path = "/api/reviews/{id}/helpful",
    tags = ["reviews"],
    operation_id = "markReviewHelpful",
    responses(
        (status = 200, description = "Updated review", body = Review),
        (status = 404, description = "Not found")
    )
)]
#[put("/reviews/{id}/helpful")]
pub async fn helpful(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(
        state.reviews.toggle_helpful(&caller, id).await?,
    ))
}

/// Delete a review. Author or admin.
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tags = ["reviews"],
    operation_id = "deleteReview",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/reviews/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.reviews.delete(&caller, id).await?;
    Ok(envelope::deleted("Review"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(helpful)
        .service(fetch)
        .service(update)
        .service(remove);
}
