//! Eating spot directory service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::eating_spot::{EatingSpot, EatingSpotFilter, EatingSpotPatch, NewEatingSpot};
use crate::domain::error::Error;
use crate::domain::identity::Caller;
use crate::domain::ports::EatingSpotRepository;

fn not_found() -> Error {
    Error::not_found("Eating spot not found")
}

/// Orchestrates gate checks and store calls for eating spots.
#[derive(Clone)]
pub struct EatingSpotService {
    repo: Arc<dyn EatingSpotRepository>,
}

impl EatingSpotService {
    pub fn new(repo: Arc<dyn EatingSpotRepository>) -> Self {
        Self { repo }
    }

    /// Matching spots, best rated first.
    pub async fn list(&self, filter: EatingSpotFilter) -> Result<Vec<EatingSpot>, Error> {
        Ok(self.repo.list(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<EatingSpot, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Admin-only create. Duplicate names surface as a validation error
    /// through the store's uniqueness guard.
    pub async fn create(&self, caller: &Caller, new: NewEatingSpot) -> Result<EatingSpot, Error> {
        authorize(ResourceKind::EatingSpot, None, caller, Action::Create)?;
        let spot = EatingSpot::new(new, caller.id, Utc::now())?;
        Ok(self.repo.insert(spot).await?)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: EatingSpotPatch,
    ) -> Result<EatingSpot, Error> {
        let spot = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::EatingSpot,
            Some(&spot.added_by),
            caller,
            Action::Update,
        )?;
        self.repo.update(id, patch).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let spot = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::EatingSpot,
            Some(&spot.added_by),
            caller,
            Action::Delete,
        )?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
