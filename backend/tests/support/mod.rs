//! Shared helpers for end-to-end tests over in-memory storage.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the app wiring and request helpers live here rather than being repeated
//! per scenario file.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use serde_json::Value;
use uuid::Uuid;

use backend::Trace;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::identity::{CALLER_ID_HEADER, CALLER_ROLE_HEADER};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{
    confessions, eating_spots, events, forum, notices, reviews, study_spots,
};

/// Initialise the full API surface over fresh in-memory storage.
pub async fn init_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::in_memory()))
            .app_data(health)
            .wrap(Trace)
            .service(
                web::scope("/api")
                    .configure(study_spots::configure)
                    .configure(eating_spots::configure)
                    .configure(confessions::configure)
                    .configure(reviews::configure)
                    .configure(notices::configure)
                    .configure(events::configure)
                    .configure(forum::configure),
            )
            .service(ready)
            .service(live),
    )
    .await
}

/// Stamp caller identity headers onto a request.
pub fn as_caller(request: test::TestRequest, id: Uuid, role: &str) -> test::TestRequest {
    request
        .insert_header((CALLER_ID_HEADER, id.to_string()))
        .insert_header((CALLER_ROLE_HEADER, role.to_owned()))
}

/// Run a request and decode the envelope.
pub async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    request: test::TestRequest,
) -> (u16, Value) {
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}
