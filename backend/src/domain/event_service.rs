//! Events calendar service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::error::Error;
use crate::domain::event::{Event, EventCategory, EventFilter, EventOrder, EventPatch, NewEvent};
use crate::domain::identity::Caller;
use crate::domain::ports::EventRepository;

fn not_found() -> Error {
    Error::not_found("Event not found")
}

/// Orchestrates gate checks and store calls for events.
#[derive(Clone)]
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// The public calendar: active events in schedule order. `upcoming`
    /// (the default) hides events whose date has passed.
    pub async fn list_public(
        &self,
        category: Option<EventCategory>,
        upcoming: bool,
    ) -> Result<Vec<Event>, Error> {
        Ok(self
            .repo
            .list(EventFilter {
                category,
                starting_from: upcoming.then(Utc::now),
                active_only: true,
                order: EventOrder::Schedule,
            })
            .await?)
    }

    /// The staff view: every event, latest date first. Admin or faculty.
    pub async fn list_all(&self, caller: &Caller) -> Result<Vec<Event>, Error> {
        authorize(ResourceKind::Event, None, caller, Action::ListAll)?;
        Ok(self
            .repo
            .list(EventFilter {
                order: EventOrder::LatestDate,
                ..EventFilter::default()
            })
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Event, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, caller: &Caller, new: NewEvent) -> Result<Event, Error> {
        authorize(ResourceKind::Event, None, caller, Action::Create)?;
        let event = Event::new(new, caller.id, Utc::now())?;
        Ok(self.repo.insert(event).await?)
    }

    /// Owner, admin, or faculty may update an event.
    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: EventPatch,
    ) -> Result<Event, Error> {
        let event = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Event,
            Some(&event.posted_by),
            caller,
            Action::Update,
        )?;
        self.repo.update(id, patch).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let event = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Event,
            Some(&event.posted_by),
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
