//! Driven ports: repository traits the record store adapter implements.
//!
//! Every port shares [`StoreError`] because the record store is a single
//! collaborator. Traits are `automock`ed in tests so services and handlers
//! unit-test without a live store.

mod confession_repository;
mod eating_spot_repository;
mod event_repository;
mod forum_repository;
pub(crate) mod macros;
mod notice_repository;
mod review_repository;
mod store_error;
mod study_spot_repository;

pub(crate) use macros::define_port_error;

pub use confession_repository::ConfessionRepository;
pub use eating_spot_repository::EatingSpotRepository;
pub use event_repository::EventRepository;
pub use forum_repository::ForumRepository;
pub use notice_repository::NoticeRepository;
pub use review_repository::ReviewRepository;
pub use store_error::StoreError;
pub use study_spot_repository::StudySpotRepository;

#[cfg(test)]
pub use confession_repository::MockConfessionRepository;
#[cfg(test)]
pub use eating_spot_repository::MockEatingSpotRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use forum_repository::MockForumRepository;
#[cfg(test)]
pub use notice_repository::MockNoticeRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use study_spot_repository::MockStudySpotRepository;
