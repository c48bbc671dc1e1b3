//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed campus resources (study spots, eating
//! spots, confessions, reviews, notices, events, forum posts), the
//! authorization gate that protects their mutations, and the services
//! that orchestrate both over the repository ports. Keep invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod authorization;
pub mod confession;
mod confession_service;
pub mod eating_spot;
mod eating_spot_service;
pub mod error;
pub mod event;
mod event_service;
pub(crate) mod fields;
pub mod forum;
mod forum_service;
pub mod identity;
pub mod notice;
mod notice_service;
pub mod ports;
pub mod review;
mod review_service;
pub mod study_spot;
mod study_spot_service;
pub mod votes;

pub use self::authorization::{Action, ResourceKind, authorize};
pub use self::confession::Confession;
pub use self::confession_service::ConfessionService;
pub use self::eating_spot::EatingSpot;
pub use self::eating_spot_service::EatingSpotService;
pub use self::error::{Error, ErrorCode};
pub use self::event::Event;
pub use self::event_service::EventService;
pub use self::forum::ForumPost;
pub use self::forum_service::ForumService;
pub use self::identity::{Caller, CallerId, Role};
pub use self::notice::Notice;
pub use self::notice_service::NoticeService;
pub use self::review::Review;
pub use self::review_service::ReviewService;
pub use self::study_spot::StudySpot;
pub use self::study_spot_service::StudySpotService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
