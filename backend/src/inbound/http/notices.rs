//! Notice board HTTP handlers.
//!
//! The public board ranks by priority and hides inactive or expired
//! notices; `/notices/all` is the staff view (admin or faculty).
//!
//! ```text
//! GET    /api/notices?category=&priority=
//! GET    /api/notices/all
//! POST   /api/notices
//! GET    /api/notices/{id}
//! PUT    /api/notices/{id}
//! DELETE /api/notices/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::domain::fields::require_text;
use crate::domain::notice::{
    Attachment, Audience, NewNotice, Notice, NoticeCategory, NoticePatch, NoticePriority,
};
use crate::domain::{Caller, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    missing_field_error, parse_optional_enum, parse_optional_rfc3339_timestamp, parse_path_id,
    require,
};

const MISSING: &str = "Notice not found";

/// Distinguishes an absent key from an explicit `null`, so a PUT can
/// clear `validTill` by sending `"validTill": null`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    pub target_audience: Option<Vec<Audience>>,
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub valid_till: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NoticeQuery {
    pub category: Option<String>,
    pub priority: Option<String>,
}

fn parse_new(payload: NoticeRequest) -> Result<NewNotice, Error> {
    let valid_till = match payload.valid_till {
        Some(value) => parse_optional_rfc3339_timestamp("validTill", value)?,
        None => None,
    };
    Ok(NewNotice {
        title: require("title", payload.title)?,
        content: require("content", payload.content)?,
        category: parse_optional_enum("category", payload.category, &NoticeCategory::ALLOWED)?
            .ok_or_else(|| missing_field_error("category"))?,
        priority: parse_optional_enum("priority", payload.priority, &NoticePriority::ALLOWED)?,
        department: payload.department,
        target_audience: payload.target_audience.unwrap_or_default(),
        attachments: payload.attachments.unwrap_or_default(),
        valid_till,
        is_active: payload.is_active,
    })
}

fn parse_patch(payload: NoticeRequest) -> Result<NoticePatch, Error> {
    let valid_till = payload
        .valid_till
        .map(|value| parse_optional_rfc3339_timestamp("validTill", value))
        .transpose()?;
    Ok(NoticePatch {
        title: payload.title.map(|v| require_text("title", v)).transpose()?,
        content: payload
            .content
            .map(|v| require_text("content", v))
            .transpose()?,
        category: parse_optional_enum("category", payload.category, &NoticeCategory::ALLOWED)?,
        priority: parse_optional_enum("priority", payload.priority, &NoticePriority::ALLOWED)?,
        department: payload.department,
        target_audience: payload.target_audience,
        attachments: payload.attachments,
        valid_till,
        is_active: payload.is_active,
    })
}

/// Public board: active, unexpired notices ranked by priority.
#[utoipa::path(
    get,
    path = "/api/notices",
    tags = ["notices"],
    operation_id = "listNotices",
    params(
        ("category" = Option<String>, Query, description = "Category filter"),
        ("priority" = Option<String>, Query, description = "Priority filter")
    ),
    responses((status = 200, description = "Visible notices", body = [Notice]))
)]
#[get("/notices")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<NoticeQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let category = parse_optional_enum("category", query.category, &NoticeCategory::ALLOWED)?;
    let priority = parse_optional_enum("priority", query.priority, &NoticePriority::ALLOWED)?;
    Ok(envelope::collection_or_empty(
        state.notices.list_public(category, priority).await,
    ))
}

/// Staff view: every notice including inactive and expired ones.
#[utoipa::path(
    get,
    path = "/api/notices/all",
    tags = ["notices"],
    operation_id = "listAllNotices",
    responses(
        (status = 200, description = "Every notice", body = [Notice]),
        (status = 403, description = "Forbidden")
    )
)]
#[get("/notices/all")]
pub async fn list_all(state: web::Data<HttpState>, caller: Caller) -> ApiResult<HttpResponse> {
    Ok(envelope::listing(state.notices.list_all(&caller).await?))
}

#[utoipa::path(
    get,
    path = "/api/notices/{id}",
    tags = ["notices"],
    operation_id = "getNotice",
    responses(
        (status = 200, description = "Notice", body = Notice),
        (status = 404, description = "Not found")
    )
)]
#[get("/notices/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.notices.get(id).await?))
}

/// Publish a notice. Admin or faculty.
#[utoipa::path(
    post,
    path = "/api/notices",
    tags = ["notices"],
    operation_id = "createNotice",
    request_body = NoticeRequest,
    responses(
        (status = 201, description = "Created", body = Notice),
        (status = 400, description = "Invalid request"),
        (status = 403, description = "Forbidden")
    )
)]
#[post("/notices")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<NoticeRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(state.notices.create(&caller, new).await?))
}

/// Update a notice. Owner, admin, or faculty.
#[utoipa::path(
    put,
    path = "/api/notices/{id}",
    tags = ["notices"],
    operation_id = "updateNotice",
    request_body = NoticeRequest,
    responses(
        (status = 200, description = "Updated", body = Notice),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/notices/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<NoticeRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.notices.update(&caller, id, patch).await?,
    ))
}

/// Delete a notice. Owner or admin.
#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    tags = ["notices"],
    operation_id = "deleteNotice",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/notices/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.notices.delete(&caller, id).await?;
    Ok(envelope::deleted("Notice"))
}

/// `/notices/all` must register ahead of the `{id}` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(list_all)
        .service(create)
        .service(fetch)
        .service(update)
        .service(remove);
}
