//! HTTP inbound adapter exposing the REST endpoints.

pub mod confessions;
pub mod eating_spots;
pub mod envelope;
pub mod error;
pub mod events;
pub mod forum;
pub mod health;
pub mod identity;
pub mod notices;
pub mod reviews;
pub mod state;
pub mod study_spots;
pub mod validation;

pub use error::ApiResult;
pub use state::HttpState;
