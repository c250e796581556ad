//! # Listing Client
//!
//! Provides a high‑level API for interacting with the `Listing` actor.
//! It wraps a `ResourceClient<Listing>` and exposes the directory lookups and the
//! reservation store operations as typed methods.
use crate::listing_actor::{ListingAction, ListingActionResult, ListingError};
use crate::model::{
    BookingId, BookingRequest, Listing, ListingCreate, ListingHours, ListingId, ListingKind,
    ListingUpdate, Reservation,
};
use crate::policy::{Rejection, ValidationResult};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Listing actor.
#[derive(Clone)]
pub struct ListingClient {
    inner: ResourceClient<Listing>,
}

impl ListingClient {
    pub fn new(inner: ResourceClient<Listing>) -> Self {
        Self { inner }
    }
}

/// Unboxes a `ListingError` raised by a hook; anything else is a transport failure.
fn listing_error(e: FrameworkError) -> ListingError {
    match e {
        FrameworkError::NotFound(id) => ListingError::NotFound(id),
        other => other
            .downcast_entity::<ListingError>()
            .unwrap_or_else(|e| ListingError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorClient<Listing> for ListingClient {
    type Error = ListingError;

    fn inner(&self) -> &ResourceClient<Listing> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        listing_error(e)
    }
}

impl ListingClient {
    #[instrument(skip(self))]
    pub async fn create_listing(&self, params: ListingCreate) -> Result<ListingId, ListingError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(listing_error)
    }

    /// Applies `update` and returns the listing as stored afterwards.
    #[instrument(skip(self))]
    pub async fn update_listing(
        &self,
        id: ListingId,
        update: ListingUpdate,
    ) -> Result<Listing, ListingError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(listing_error)
    }

    /// Operating hours of a `kind` listing, or `None` when there is no such listing.
    #[instrument(skip(self))]
    pub async fn lookup(
        &self,
        kind: ListingKind,
        id: ListingId,
    ) -> Result<Option<ListingHours>, ListingError> {
        debug!("Looking up hours");
        match self.inner.perform_action(id, ListingAction::Lookup { kind }).await {
            Ok(ListingActionResult::Lookup(hours)) => Ok(hours),
            Ok(_) => unreachable!("Lookup action must return Lookup result"),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(listing_error(e)),
        }
    }

    /// Reservations on the listing that intersect `[start, end)`, earliest first.
    /// Empty when there is no such listing.
    #[instrument(skip(self))]
    pub async fn find_overlapping(
        &self,
        kind: ListingKind,
        id: ListingId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, ListingError> {
        debug!("Finding overlapping reservations");
        let action = ListingAction::FindOverlapping { kind, start, end };
        match self.inner.perform_action(id, action).await {
            Ok(ListingActionResult::FindOverlapping(found)) => Ok(found),
            Ok(_) => unreachable!("FindOverlapping action must return FindOverlapping result"),
            Err(FrameworkError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(listing_error(e)),
        }
    }

    /// Validates `request` and, if accepted, holds the slot for `booking_id`.
    ///
    /// A missing listing is reported as `Rejected(ResourceNotFound)` rather than an error.
    #[instrument(skip(self, request))]
    pub async fn reserve(
        &self,
        id: ListingId,
        booking_id: BookingId,
        request: BookingRequest,
    ) -> Result<ValidationResult, ListingError> {
        debug!(?request, "Reserving slot");
        let action = ListingAction::Reserve {
            booking_id,
            request,
        };
        match self.inner.perform_action(id, action).await {
            Ok(ListingActionResult::Reserve(result)) => Ok(result),
            Ok(_) => unreachable!("Reserve action must return Reserve result"),
            Err(FrameworkError::NotFound(_)) => {
                Ok(ValidationResult::Rejected(Rejection::ResourceNotFound))
            }
            Err(e) => Err(listing_error(e)),
        }
    }

    /// Frees the slot held by `booking_id`. Returns whether one was held.
    #[instrument(skip(self))]
    pub async fn release(&self, id: ListingId, booking_id: BookingId) -> Result<bool, ListingError> {
        debug!("Releasing slot");
        match self
            .inner
            .perform_action(id, ListingAction::Release { booking_id })
            .await
        {
            Ok(ListingActionResult::Release(released)) => Ok(released),
            Ok(_) => unreachable!("Release action must return Release result"),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(listing_error(e)),
        }
    }

    /// Every reservation on the listing, earliest first.
    #[instrument(skip(self))]
    pub async fn calendar(&self, id: ListingId) -> Result<Vec<Reservation>, ListingError> {
        debug!("Fetching calendar");
        match self.inner.perform_action(id, ListingAction::Calendar).await {
            Ok(ListingActionResult::Calendar(calendar)) => Ok(calendar),
            Ok(_) => unreachable!("Calendar action must return Calendar result"),
            Err(e) => Err(listing_error(e)),
        }
    }
}
