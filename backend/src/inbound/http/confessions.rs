//! Confession HTTP handlers.
//!
//! The public feed only surfaces approved confessions; the moderation feed
//! at `/confessions/all` shows everything and is admin-gated.
//!
//! ```text
//! GET    /api/confessions
//! GET    /api/confessions/all
//! POST   /api/confessions
//! PUT    /api/confessions/{id}/like
//! PUT    /api/confessions/{id}/approve
//! DELETE /api/confessions/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::Caller;
use crate::domain::confession::Confession;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_path_id, require};

const MISSING: &str = "Confession not found";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfessionRequest {
    pub content: Option<String>,
    /// Defaults to `true`: confessions are anonymous unless opted out.
    pub is_anonymous: Option<bool>,
}

/// Public feed: approved confessions, newest first.
#[utoipa::path(
    get,
    path = "/api/confessions",
    tags = ["confessions"],
    operation_id = "listConfessions",
    responses((status = 200, description = "Approved confessions", body = [Confession]))
)]
#[get("/confessions")]
pub async fn list(state: web::Data<HttpState>) -> HttpResponse {
    envelope::collection_or_empty(state.confessions.list_public().await)
}

/// Moderation feed including pending confessions. Admin only.
#[utoipa::path(
    get,
    path = "/api/confessions/all",
    tags = ["confessions"],
    operation_id = "listAllConfessions",
    responses(
        (status = 200, description = "Every confession", body = [Confession]),
        (status = 403, description = "Forbidden")
    )
)]
#[get("/confessions/all")]
pub async fn list_all(state: web::Data<HttpState>, caller: Caller) -> ApiResult<HttpResponse> {
    Ok(envelope::listing(state.confessions.list_all(&caller).await?))
}

/// Submit a confession. It stays out of the public feed until approved.
#[utoipa::path(
    post,
    path = "/api/confessions",
    tags = ["confessions"],
    operation_id = "createConfession",
    request_body = ConfessionRequest,
    responses(
        (status = 201, description = "Created", body = Confession),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorised")
    )
)]
#[post("/confessions")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<ConfessionRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let content = require("content", payload.content)?;
    let is_anonymous = payload.is_anonymous.unwrap_or(true);
    Ok(envelope::created(
        state.confessions.create(&caller, content, is_anonymous).await?,
    ))
}

/// Toggle the caller's like on a confession.
#[utoipa::path(
    put,
    path = "/api/confessions/{id}/like",
    tags = ["confessions"],
    operation_id = "likeConfession",
    responses(
        (status = 200, description = "Updated confession", body = Confession),
        (status = 404, description = "Not found")
    )
)]
#[put("/confessions/{id}/like")]
pub async fn like(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(
        state.confessions.toggle_like(&caller, id).await?,
    ))
}

/// Approve a confession for the public feed. Admin only, idempotent.
#[utoipa::path(
    put,
    path = "/api/confessions/{id}/approve",
    tags = ["confessions"],
    operation_id = "approveConfession",
    responses(
        (status = 200, description = "Approved confession", body = Confession),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/confessions/{id}/approve")]
pub async fn approve(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(
        state.confessions.approve(&caller, id).await?,
    ))
}

/// Delete a confession. Author or admin.
#[utoipa::path(
    delete,
    path = "/api/confessions/{id}",
    tags = ["confessions"],
    operation_id = "deleteConfession",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/confessions/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.confessions.delete(&caller, id).await?;
    Ok(envelope::deleted("Confession"))
}

/// `/confessions/all` must register ahead of the `{id}` routes so the
/// literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(list_all)
        .service(create)
        .service(like)
        .service(approve)
        .service(remove);
}
