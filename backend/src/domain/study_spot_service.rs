//! Study spot catalogue service.
//!
//! Study spots carry no owner, so the gate always sees `owner = None` and
//! only admins pass the mutation checks.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::error::Error;
use crate::domain::identity::Caller;
use crate::domain::ports::StudySpotRepository;
use crate::domain::study_spot::{NewStudySpot, StudySpot, StudySpotPatch};

fn not_found() -> Error {
    Error::not_found("Study spot not found")
}

/// Orchestrates gate checks and store calls for study spots.
#[derive(Clone)]
pub struct StudySpotService {
    repo: Arc<dyn StudySpotRepository>,
}

impl StudySpotService {
    pub fn new(repo: Arc<dyn StudySpotRepository>) -> Self {
        Self { repo }
    }

    /// Every spot, newest first.
    pub async fn list(&self) -> Result<Vec<StudySpot>, Error> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<StudySpot, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, caller: &Caller, new: NewStudySpot) -> Result<StudySpot, Error> {
        authorize(ResourceKind::StudySpot, None, caller, Action::Create)?;
        let spot = StudySpot::new(new, Utc::now())?;
        Ok(self.repo.insert(spot).await?)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: StudySpotPatch,
    ) -> Result<StudySpot, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(ResourceKind::StudySpot, None, caller, Action::Update)?;
        self.repo.update(id, patch).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(ResourceKind::StudySpot, None, caller, Action::Delete)?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
