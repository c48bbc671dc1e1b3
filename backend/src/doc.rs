//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the REST API: every resource endpoint, the health probes, the
//! domain record schemas, and the caller identity header scheme.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::confession::Confession;
use crate::domain::eating_spot::EatingSpot;
use crate::domain::event::{Contact, Event};
use crate::domain::forum::{ForumPost, Reply};
use crate::domain::notice::{Attachment, Audience, Notice};
use crate::domain::review::Review;
use crate::domain::study_spot::StudySpot;
use crate::inbound::http::confessions::ConfessionRequest;
use crate::inbound::http::eating_spots::EatingSpotRequest;
use crate::inbound::http::events::EventRequest;
use crate::inbound::http::forum::{ForumPostRequest, ReplyRequest};
use crate::inbound::http::notices::NoticeRequest;
use crate::inbound::http::reviews::ReviewRequest;
use crate::inbound::http::study_spots::StudySpotRequest;

/// Enrich the generated document with the caller identity header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "CallerId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Caller-Id",
                "UUID identifying the caller.",
            ))),
        );
        components.add_security_scheme(
            "CallerRole",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Caller-Role",
                "Caller role: student, faculty or admin.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Quadrangle backend API",
        description = "Campus community REST API: study spots, eating spots, \
                       confessions, reviews, notices, events, and the forum."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("CallerId" = []), ("CallerRole" = [])),
    paths(
        crate::inbound::http::study_spots::list,
        crate::inbound::http::study_spots::fetch,
        crate::inbound::http::study_spots::create,
        crate::inbound::http::study_spots::update,
        crate::inbound::http::study_spots::remove,
        crate::inbound::http::eating_spots::list,
        crate::inbound::http::eating_spots::fetch,
        crate::inbound::http::eating_spots::create,
        crate::inbound::http::eating_spots::update,
        crate::inbound::http::eating_spots::remove,
        crate::inbound::http::confessions::list,
        crate::inbound::http::confessions::list_all,
        crate::inbound::http::confessions::create,
        crate::inbound::http::confessions::like,
        crate::inbound::http::confessions::approve,
        crate::inbound::http::confessions::remove,
        crate::inbound::http::reviews::list,
        crate::inbound::http::reviews::fetch,
        crate::inbound::http::reviews::create,
        crate::inbound::http::reviews::update,
        crate::inbound::http::reviews::helpful,
        crate::inbound::http::reviews::remove,
        crate::inbound::http::notices::list,
        crate::inbound::http::notices::list_all,
        crate::inbound::http::notices::fetch,
        crate::inbound::http::notices::create,
        crate::inbound::http::notices::update,
        crate::inbound::http::notices::remove,
        crate::inbound::http::events::list,
        crate::inbound::http::events::list_all,
        crate::inbound::http::events::fetch,
        crate::inbound::http::events::create,
        crate::inbound::http::events::update,
        crate::inbound::http::events::remove,
        crate::inbound::http::forum::list,
        crate::inbound::http::forum::fetch,
        crate::inbound::http::forum::create,
        crate::inbound::http::forum::update,
        crate::inbound::http::forum::reply,
        crate::inbound::http::forum::upvote,
        crate::inbound::http::forum::solve,
        crate::inbound::http::forum::remove,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StudySpot,
        StudySpotRequest,
        EatingSpot,
        EatingSpotRequest,
        Confession,
        ConfessionRequest,
        Review,
        ReviewRequest,
        Notice,
        NoticeRequest,
        Audience,
        Attachment,
        Event,
        EventRequest,
        Contact,
        ForumPost,
        ForumPostRequest,
        Reply,
        ReplyRequest,
    )),
    tags(
        (name = "study-spots", description = "Places to study on campus"),
        (name = "eating-spots", description = "Places to eat on campus"),
        (name = "confessions", description = "Anonymous confessions with moderation"),
        (name = "reviews", description = "Campus facility reviews"),
        (name = "notices", description = "Official notice board"),
        (name = "events", description = "Events calendar"),
        (name = "forum", description = "Discussion forum"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI document structure.

    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn document_registers_every_resource_collection_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/study-spots",
            "/api/eating-spots",
            "/api/confessions",
            "/api/reviews",
            "/api/notices",
            "/api/events",
            "/api/forum/posts",
            "/health/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should describe {path}"
            );
        }
    }

    #[test]
    fn document_registers_the_record_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in [
            "StudySpot",
            "EatingSpot",
            "Confession",
            "Review",
            "Notice",
            "Event",
            "ForumPost",
        ] {
            assert!(schemas.contains_key(name), "schema {name} should register");
        }
    }

    #[test]
    fn caller_identity_headers_are_the_security_schemes() {
        let doc = ApiDoc::openapi();
        let schemes = &doc
            .components
            .as_ref()
            .expect("components")
            .security_schemes;
        assert!(schemes.contains_key("CallerId"));
        assert!(schemes.contains_key("CallerRole"));
    }
}
