//! Forum HTTP handlers.
//!
//! ```text
//! GET    /api/forum/posts?category=&sort=
//! POST   /api/forum/posts
//! GET    /api/forum/posts/{id}
//! PUT    /api/forum/posts/{id}
//! DELETE /api/forum/posts/{id}
//! POST   /api/forum/posts/{id}/replies
//! PUT    /api/forum/posts/{id}/upvote
//! PUT    /api/forum/posts/{id}/solve
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::fields::require_text;
use crate::domain::forum::{
    ForumCategory, ForumOrder, ForumPost, ForumPostFilter, ForumPostPatch, NewForumPost,
};
use crate::domain::{Caller, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    missing_field_error, parse_optional_enum, parse_path_id, require,
};

const MISSING: &str = "Post not found";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplyRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForumQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Unrecognised sort values fall back to the default feed order.
fn parse_sort(value: Option<String>) -> ForumOrder {
    match value.as_deref() {
        Some("popular") => ForumOrder::Popular,
        Some("views") => ForumOrder::MostViewed,
        _ => ForumOrder::Newest,
    }
}

fn parse_new(payload: ForumPostRequest) -> Result<NewForumPost, Error> {
    Ok(NewForumPost {
        title: require("title", payload.title)?,
        content: require("content", payload.content)?,
        category: parse_optional_enum("category", payload.category, &ForumCategory::ALLOWED)?
            .ok_or_else(|| missing_field_error("category"))?,
        tags: payload.tags.unwrap_or_default(),
    })
}

fn parse_patch(payload: ForumPostRequest) -> Result<ForumPostPatch, Error> {
    Ok(ForumPostPatch {
        title: payload.title.map(|v| require_text("title", v)).transpose()?,
        content: payload
            .content
            .map(|v| require_text("content", v))
            .transpose()?,
        category: parse_optional_enum("category", payload.category, &ForumCategory::ALLOWED)?,
        tags: payload.tags,
    })
}

/// List posts in the requested order.
#[utoipa::path(
    get,
    path = "/api/forum/posts",
    tags = ["forum"],
    operation_id = "listForumPosts",
    params(
        ("category" = Option<String>, Query, description = "Board filter"),
        ("sort" = Option<String>, Query, description = "`popular`, `views`, or newest by default")
    ),
    responses((status = 200, description = "Post listing", body = [ForumPost]))
)]
#[get("/forum/posts")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<ForumQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let filter = ForumPostFilter {
        category: parse_optional_enum("category", query.category, &ForumCategory::ALLOWED)?,
        order: parse_sort(query.sort),
    };
    Ok(envelope::collection_or_empty(state.forum.list(filter).await))
}

/// Fetch a post for display. Every fetch counts a view.
#[utoipa::path(
    get,
    path = "/api/forum/posts/{id}",
    tags = ["forum"],
    operation_id = "getForumPost",
    responses(
        (status = 200, description = "Post with the view counted", body = ForumPost),
        (status = 404, description = "Not found")
    )
)]
#[get("/forum/posts/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.forum.read(id).await?))
}

/// Open a post. Any authenticated caller.
#[utoipa::path(
    post,
    path = "/api/forum/posts",
    tags = ["forum"],
    operation_id = "createForumPost",
    request_body = ForumPostRequest,
    responses(
        (status = 201, description = "Created", body = ForumPost),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorised")
    )
)]
#[post("/forum/posts")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<ForumPostRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(state.forum.create(&caller, new).await?))
}

/// Update a post. Author or admin.
#[utoipa::path(
    put,
    path = "/api/forum/posts/{id}",
    tags = ["forum"],
    operation_id = "updateForumPost",
    request_body = ForumPostRequest,
    responses(
        (status = 200, description = "Updated", body = ForumPost),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/forum/posts/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<ForumPostRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.forum.update(&caller, id, patch).await?,
    ))
}

/// Append a reply; the whole updated post comes back.
#[utoipa::path(
    post,
    path = "/api/forum/posts/{id}/replies",
    tags = ["forum"],
    operation_id = "replyToForumPost",
    request_body = ReplyRequest,
    responses(
        (status = 201, description = "Post with the new reply", body = ForumPost),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Not found")
    )
)]
#[post("/forum/posts/{id}/replies")]
pub async fn reply(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<ReplyRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let content = require("content", payload.into_inner().content)?;
    Ok(envelope::created(
        state.forum.add_reply(&caller, id, content).await?,
    ))
}

/// Toggle the caller's upvote.
#[utoipa::path(
    put,
    path = "/api/forum/posts/{id}/upvote",
    tags = ["forum"],
    operation_id = "upvoteForumPost",
    responses(
        (status = 200, description = "Updated post", body = ForumPost),
        (status = 404, description = "Not found")
    )
)]
#[put("/forum/posts/{id}/upvote")]
pub async fn upvote(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(
        state.forum.toggle_upvote(&caller, id).await?,
    ))
}

/// Toggle the solved marker. Author only.
#[utoipa::path(
    put,
    path = "/api/forum/posts/{id}/solve",
    tags = ["forum"],
    operation_id = "solveForumPost",
    responses(
        (status = 200, description = "Updated post", body = ForumPost),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/forum/posts/{id}/solve")]
pub async fn solve(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(
        state.forum.toggle_solved(&caller, id).await?,
    ))
}

/// Delete a post. Author or admin.
#[utoipa::path(
    delete,
    path = "/api/forum/posts/{id}",
    tags = ["forum"],
    operation_id = "deleteForumPost",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/forum/posts/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.forum.delete(&caller, id).await?;
    Ok(envelope::deleted("Post"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(reply)
        .service(upvote)
        .service(solve)
        .service(fetch)
        .service(update)
        .service(remove);
}
