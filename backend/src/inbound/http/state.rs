//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ConfessionRepository, EatingSpotRepository, EventRepository, ForumRepository,
    NoticeRepository, ReviewRepository, StudySpotRepository,
};
use crate::domain::{
    ConfessionService, EatingSpotService, EventService, ForumService, NoticeService,
    ReviewService, StudySpotService,
};
use crate::outbound::persistence::{
    MemoryConfessionRepository, MemoryEatingSpotRepository, MemoryEventRepository,
    MemoryForumRepository, MemoryNoticeRepository, MemoryReviewRepository,
    MemoryStudySpotRepository,
};

/// Parameter object bundling the repository implementations behind the
/// HTTP surface.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub study_spots: Arc<dyn StudySpotRepository>,
    pub eating_spots: Arc<dyn EatingSpotRepository>,
    pub confessions: Arc<dyn ConfessionRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub events: Arc<dyn EventRepository>,
    pub forum: Arc<dyn ForumRepository>,
}

impl HttpStatePorts {
    /// Ports over fresh, empty in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            study_spots: Arc::new(MemoryStudySpotRepository::new()),
            eating_spots: Arc::new(MemoryEatingSpotRepository::new()),
            confessions: Arc::new(MemoryConfessionRepository::new()),
            reviews: Arc::new(MemoryReviewRepository::new()),
            notices: Arc::new(MemoryNoticeRepository::new()),
            events: Arc::new(MemoryEventRepository::new()),
            forum: Arc::new(MemoryForumRepository::new()),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub study_spots: StudySpotService,
    pub eating_spots: EatingSpotService,
    pub confessions: ConfessionService,
    pub reviews: ReviewService,
    pub notices: NoticeService,
    pub events: EventService,
    pub forum: ForumService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            study_spots,
            eating_spots,
            confessions,
            reviews,
            notices,
            events,
            forum,
        } = ports;
        Self {
            study_spots: StudySpotService::new(study_spots),
            eating_spots: EatingSpotService::new(eating_spots),
            confessions: ConfessionService::new(confessions),
            reviews: ReviewService::new(reviews),
            notices: NoticeService::new(notices),
            events: EventService::new(events),
            forum: ForumService::new(forum),
        }
    }
}

impl HttpState {
    /// State over fresh in-memory storage.
    ///
    /// # Examples
    /// ```
    /// use backend::inbound::http::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _forum = state.forum.clone();
    /// ```
    pub fn in_memory() -> Self {
        HttpStatePorts::in_memory().into()
    }
}
