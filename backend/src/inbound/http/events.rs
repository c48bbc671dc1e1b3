//! Events calendar HTTP handlers.
//!
//! The public calendar hides past and inactive events unless
//! `upcoming=false` lifts the horizon; `/events/all` is the staff view.
//!
//! ```text
//! GET    /api/events?category=&upcoming=
//! GET    /api/events/all
//! POST   /api/events
//! GET    /api/events/{id}
//! PUT    /api/events/{id}
//! DELETE /api/events/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::domain::event::{Contact, Event, EventCategory, EventPatch, NewEvent};
use crate::domain::fields::require_text;
use crate::domain::{Caller, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    missing_field_error, parse_optional_bool, parse_optional_enum,
    parse_optional_rfc3339_timestamp, parse_path_id, parse_rfc3339_timestamp, require,
};

const MISSING: &str = "Event not found";

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub organizer: Option<String>,
    pub contact: Option<Contact>,
    pub registration_required: Option<bool>,
    pub registration_link: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub registration_deadline: Option<Option<String>>,
    pub capacity: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct EventQuery {
    pub category: Option<String>,
    pub upcoming: Option<String>,
}

fn parse_new(payload: EventRequest) -> Result<NewEvent, Error> {
    let deadline = match payload.registration_deadline {
        Some(value) => parse_optional_rfc3339_timestamp("registrationDeadline", value)?,
        None => None,
    };
    Ok(NewEvent {
        title: require("title", payload.title)?,
        description: require("description", payload.description)?,
        category: parse_optional_enum("category", payload.category, &EventCategory::ALLOWED)?
            .ok_or_else(|| missing_field_error("category"))?,
        venue: require("venue", payload.venue)?,
        date: parse_rfc3339_timestamp("date", require("date", payload.date)?)?,
        start_time: require("startTime", payload.start_time)?,
        end_time: require("endTime", payload.end_time)?,
        organizer: require("organizer", payload.organizer)?,
        contact: payload.contact,
        registration_required: payload.registration_required,
        registration_link: payload.registration_link,
        registration_deadline: deadline,
        capacity: payload.capacity,
        tags: payload.tags.unwrap_or_default(),
        image: payload.image,
        is_active: payload.is_active,
    })
}

fn parse_patch(payload: EventRequest) -> Result<EventPatch, Error> {
    let deadline = payload
        .registration_deadline
        .map(|value| parse_optional_rfc3339_timestamp("registrationDeadline", value))
        .transpose()?;
    Ok(EventPatch {
        title: payload.title.map(|v| require_text("title", v)).transpose()?,
        description: payload
            .description
            .map(|v| require_text("description", v))
            .transpose()?,
        category: parse_optional_enum("category", payload.category, &EventCategory::ALLOWED)?,
        venue: payload.venue.map(|v| require_text("venue", v)).transpose()?,
        date: payload
            .date
            .map(|v| parse_rfc3339_timestamp("date", v))
            .transpose()?,
        start_time: payload
            .start_time
            .map(|v| require_text("startTime", v))
            .transpose()?,
        end_time: payload
            .end_time
            .map(|v| require_text("endTime", v))
            .transpose()?,
        organizer: payload
            .organizer
            .map(|v| require_text("organizer", v))
            .transpose()?,
        contact: payload.contact,
        registration_required: payload.registration_required,
        registration_link: payload.registration_link,
        registration_deadline: deadline,
        capacity: payload.capacity,
        tags: payload.tags,
        image: payload.image,
        is_active: payload.is_active,
    })
}

/// Public calendar: active events in schedule order, upcoming by default.
#[utoipa::path(
    get,
    path = "/api/events",
    tags = ["events"],
    operation_id = "listEvents",
    params(
        ("category" = Option<String>, Query, description = "Category filter"),
        ("upcoming" = Option<bool>, Query, description = "Hide past events (default true)")
    ),
    responses((status = 200, description = "Event listing", body = [Event]))
)]
#[get("/events")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<EventQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let category = parse_optional_enum("category", query.category, &EventCategory::ALLOWED)?;
    let upcoming = parse_optional_bool("upcoming", query.upcoming)?.unwrap_or(true);
    Ok(envelope::collection_or_empty(
        state.events.list_public(category, upcoming).await,
    ))
}

/// Staff view: every event, latest date first. Admin or faculty.
#[utoipa::path(
    get,
    path = "/api/events/all",
    tags = ["events"],
    operation_id = "listAllEvents",
    responses(
        (status = 200, description = "Every event", body = [Event]),
        (status = 403, description = "Forbidden")
    )
)]
#[get("/events/all")]
pub async fn list_all(state: web::Data<HttpState>, caller: Caller) -> ApiResult<HttpResponse> {
    Ok(envelope::listing(state.events.list_all(&caller).await?))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tags = ["events"],
    operation_id = "getEvent",
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Not found")
    )
)]
#[get("/events/{id}")]
pub async fn fetch(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    Ok(envelope::record(state.events.get(id).await?))
}

/// Publish an event. Admin or faculty.
#[utoipa::path(
    post,
    path = "/api/events",
    tags = ["events"],
    operation_id = "createEvent",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Created", body = Event),
        (status = 400, description = "Invalid request"),
        (status = 403, description = "Forbidden")
    )
)]
#[post("/events")]
pub async fn create(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<EventRequest>,
) -> ApiResult<HttpResponse> {
    let new = parse_new(payload.into_inner())?;
    Ok(envelope::created(state.events.create(&caller, new).await?))
}

/// Update an event. Owner, admin, or faculty.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tags = ["events"],
    operation_id = "updateEvent",
    request_body = EventRequest,
    responses(
        (status = 200, description = "Updated", body = Event),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[put("/events/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<EventRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    let patch = parse_patch(payload.into_inner())?;
    Ok(envelope::record(
        state.events.update(&caller, id, patch).await?,
    ))
}

/// Delete an event. Owner or admin.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tags = ["events"],
    operation_id = "deleteEvent",
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
#[delete("/events/{id}")]
pub async fn remove(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, MISSING)?;
    state.events.delete(&caller, id).await?;
    Ok(envelope::deleted("Event"))
}

/// `/events/all` must register ahead of the `{id}` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(list_all)
        .service(create)
        .service(fetch)
        .service(update)
        .service(remove);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::CallerId;
    use crate::domain::ports::MockEventRepository;
    use crate::inbound::http::identity::{CALLER_ID_HEADER, CALLER_ROLE_HEADER};
    use crate::inbound::http::state::test_support::StubPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Arc;
    use uuid::Uuid;

    fn sample_event(posted_by: CallerId, date: DateTime<Utc>) -> Event {
        Event::new(
            NewEvent {
                title: "Robotics workshop".into(),
                description: "Line followers from scratch".into(),
                category: EventCategory::Workshop,
                venue: "Lab 4".into(),
                date,
                start_time: "10:00 AM".into(),
                end_time: "01:00 PM".into(),
                organizer: "Robotics club".into(),
                contact: None,
                registration_required: None,
                registration_link: None,
                registration_deadline: None,
                capacity: None,
                tags: Vec::new(),
                image: None,
                is_active: None,
            },
            posted_by,
            Utc::now(),
        )
        .expect("valid event")
    }

    async fn app_with(
        repo: MockEventRepository,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let state = StubPorts {
            events: Arc::new(repo),
            ..StubPorts::default()
        }
        .into_state();
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").configure(configure)),
        )
        .await
    }

    #[actix_web::test]
    async fn listing_defaults_to_the_upcoming_horizon() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .withf(|filter| filter.starting_from.is_some() && filter.active_only)
            .returning(|_| Ok(Vec::new()));
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/events").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn upcoming_false_lifts_the_horizon() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .withf(|filter| filter.starting_from.is_none())
            .returning(|_| Ok(Vec::new()));
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/events?upcoming=false")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn create_requires_an_rfc3339_date() {
        let mut repo = MockEventRepository::new();
        repo.expect_insert().never();
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/events")
                .insert_header((CALLER_ID_HEADER, Uuid::new_v4().to_string()))
                .insert_header((CALLER_ROLE_HEADER, "faculty"))
                .set_json(serde_json::json!({
                    "title": "Fest",
                    "description": "Opening night",
                    "category": "Cultural",
                    "venue": "Amphitheatre",
                    "date": "this saturday",
                    "startTime": "06:00 PM",
                    "endTime": "09:00 PM",
                    "organizer": "Cultural committee",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "date must be an RFC 3339 timestamp");
    }

    #[actix_web::test]
    async fn faculty_create_round_trips_the_contact_block() {
        let mut repo = MockEventRepository::new();
        repo.expect_insert().returning(|event| Ok(event));
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/events")
                .insert_header((CALLER_ID_HEADER, Uuid::new_v4().to_string()))
                .insert_header((CALLER_ROLE_HEADER, "faculty"))
                .set_json(serde_json::json!({
                    "title": "Fest",
                    "description": "Opening night",
                    "category": "Cultural",
                    "venue": "Amphitheatre",
                    "date": "2026-09-12T12:30:00Z",
                    "startTime": "06:00 PM",
                    "endTime": "09:00 PM",
                    "organizer": "Cultural committee",
                    "contact": { "email": "fest@example.edu" },
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["data"]["contact"]["email"], "fest@example.edu");
        assert_eq!(body["data"]["registrationRequired"], false);
    }

    #[actix_web::test]
    async fn student_create_is_forbidden() {
        let mut repo = MockEventRepository::new();
        repo.expect_insert().never();
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/events")
                .insert_header((CALLER_ID_HEADER, Uuid::new_v4().to_string()))
                .insert_header((CALLER_ROLE_HEADER, "student"))
                .set_json(serde_json::json!({
                    "title": "Fest",
                    "description": "Opening night",
                    "category": "Cultural",
                    "venue": "Amphitheatre",
                    "date": "2026-09-12T12:30:00Z",
                    "startTime": "06:00 PM",
                    "endTime": "09:00 PM",
                    "organizer": "Cultural committee",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "not authorized to create events");
    }

    #[actix_web::test]
    async fn null_deadline_clears_it_on_update() {
        let poster = CallerId::new(Uuid::from_u128(4));
        let mut event = sample_event(poster, Utc::now() + Duration::days(5));
        event.registration_deadline = Some(Utc::now());
        let id = event.id;
        let fetched = event.clone();
        let mut repo = MockEventRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(fetched.clone())));
        repo.expect_update()
            .withf(|_, patch| patch.registration_deadline == Some(None))
            .returning(move |_, patch| {
                let mut updated = event.clone();
                updated.apply(patch);
                Ok(Some(updated))
            });
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/events/{id}"))
                .insert_header((CALLER_ID_HEADER, poster.to_string()))
                .insert_header((CALLER_ROLE_HEADER, "faculty"))
                .set_json(serde_json::json!({ "registrationDeadline": null }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body["data"].get("registrationDeadline").is_none());
    }

    #[actix_web::test]
    async fn the_all_segment_is_the_staff_listing() {
        let mut repo = MockEventRepository::new();
        repo.expect_list()
            .withf(|filter| !filter.active_only && filter.starting_from.is_none())
            .returning(|_| Ok(Vec::new()));
        repo.expect_find_by_id().never();
        let app = app_with(repo).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/events/all")
                .insert_header((CALLER_ID_HEADER, Uuid::new_v4().to_string()))
                .insert_header((CALLER_ROLE_HEADER, "admin"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
