//! # Booking Client
//!
//! Provides a high‑level API for interacting with the `Booking` actor.
//! It wraps a `ResourceClient<Booking>`; slot reservation itself happens in the
//! Booking actor's `on_create` hook.
use crate::booking_actor::BookingError;
use crate::model::{Booking, BookingId, BookingRequest, BookingUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Booking actor.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<Booking>) -> Self {
        Self { inner }
    }

    /// Books the requested window.
    ///
    /// A refused window comes back as [`BookingError::Rejected`] carrying the reason.
    #[instrument(skip(self, request), fields(listing_id = %request.listing_id, kind = %request.kind))]
    pub async fn create_booking(&self, request: BookingRequest) -> Result<BookingId, BookingError> {
        debug!(?request, "create_booking called");
        info!("Sending create_booking to actor");

        self.inner.create(request).await.map_err(booking_error)
    }

    /// Replaces the booking's note.
    #[instrument(skip(self))]
    pub async fn update_note(
        &self,
        id: BookingId,
        note: Option<String>,
    ) -> Result<Booking, BookingError> {
        debug!("Sending request");
        self.inner
            .update(id, BookingUpdate { note })
            .await
            .map_err(booking_error)
    }

    /// Deletes the booking and frees its slot on the listing.
    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: BookingId) -> Result<(), BookingError> {
        info!("Cancelling booking");
        self.delete(id).await
    }
}

/// Unboxes a `BookingError` raised by a hook; anything else is a transport failure.
fn booking_error(e: FrameworkError) -> BookingError {
    match e {
        FrameworkError::NotFound(id) => BookingError::NotFound(id),
        other => other
            .downcast_entity::<BookingError>()
            .unwrap_or_else(|e| BookingError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorClient<Booking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<Booking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        booking_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListingId, ListingKind};
    use crate::policy::Rejection;
    use actor_framework::mock::MockClient;
    use chrono::{TimeZone, Utc};

    fn request() -> BookingRequest {
        BookingRequest {
            kind: ListingKind::Venue,
            listing_id: ListingId(1),
            start: Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 14, 13, 30, 0).unwrap(),
            note: None,
        }
    }

    #[tokio::test]
    async fn rejection_reason_survives_the_round_trip() {
        let mut mock = MockClient::<Booking>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(BookingError::Rejected(Rejection::Overlap)));

        let client = BookingClient::new(mock.client());
        let err = client.create_booking(request()).await.unwrap_err();

        assert_eq!(err, BookingError::Rejected(Rejection::Overlap));
        assert_eq!(err.http_status(), 409);
        mock.verify();
    }

    #[tokio::test]
    async fn missing_booking_is_not_found() {
        let mut mock = MockClient::<Booking>::new();
        mock.expect_delete(BookingId(8))
            .return_err(FrameworkError::NotFound("booking_8".into()));

        let client = BookingClient::new(mock.client());
        let err = client.cancel_booking(BookingId(8)).await.unwrap_err();

        assert_eq!(err, BookingError::NotFound("booking_8".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn dropped_reply_is_a_communication_error() {
        let mut mock = MockClient::<Booking>::new();
        mock.expect_update(BookingId(1))
            .return_err(FrameworkError::ActorDropped);

        let client = BookingClient::new(mock.client());
        let err = client
            .update_note(BookingId(1), Some("late arrival".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::ActorCommunicationError(_)));
        mock.verify();
    }
}
