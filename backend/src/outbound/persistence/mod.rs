//! In-memory persistence adapters.
//!
//! Each adapter implements one driven port from `domain::ports` over a
//! [`memory::MemoryCollection`]. Adapters stay thin: filtering, ordering and
//! merge semantics live on the domain types; this layer only holds the lock
//! discipline and the uniqueness guard for eating spot names.

mod memory;
mod memory_confession_repository;
mod memory_eating_spot_repository;
mod memory_event_repository;
mod memory_forum_repository;
mod memory_notice_repository;
mod memory_review_repository;
mod memory_study_spot_repository;

pub use memory_confession_repository::MemoryConfessionRepository;
pub use memory_eating_spot_repository::MemoryEatingSpotRepository;
pub use memory_event_repository::MemoryEventRepository;
pub use memory_forum_repository::MemoryForumRepository;
pub use memory_notice_repository::MemoryNoticeRepository;
pub use memory_review_repository::MemoryReviewRepository;
pub use memory_study_spot_repository::MemoryStudySpotRepository;
