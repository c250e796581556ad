//! ActorEntity trait implementation for the Booking domain type.
//!
//! A booking exists only while its slot is held on the listing: `on_create` reserves
//! the slot through the [`ListingClient`] in the actor's context and `on_delete`
//! releases it.

use super::error::BookingError;
use crate::clients::ListingClient;
use crate::model::{Booking, BookingId, BookingRequest, BookingUpdate};
use crate::policy::ValidationResult;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Longest note a booking may carry, in characters.
pub const MAX_NOTE_LEN: usize = 500;

fn check_note(note: Option<&str>) -> Result<(), BookingError> {
    match note {
        Some(note) if note.chars().count() > MAX_NOTE_LEN => Err(BookingError::ValidationError(
            format!("note exceeds {MAX_NOTE_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

#[async_trait]
impl ActorEntity for Booking {
    type Id = BookingId;
    type Create = BookingRequest;
    type Update = BookingUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ListingClient;
    type Error = BookingError;

    fn from_create_params(id: BookingId, request: BookingRequest) -> Result<Self, Self::Error> {
        check_note(request.note.as_deref())?;
        Ok(Booking::new(id, request))
    }

    /// Reserves the slot on the listing. A rejection aborts the creation.
    async fn on_create(&mut self, listings: &ListingClient) -> Result<(), Self::Error> {
        let result = listings
            .reserve(self.listing_id, self.id, self.request())
            .await
            .map_err(|e| BookingError::ActorCommunicationError(e.to_string()))?;

        match result {
            ValidationResult::Accepted { duration_hours } => {
                debug!(booking_id = %self.id, duration_hours, "Slot accepted");
                self.duration_hours = duration_hours;
                Ok(())
            }
            ValidationResult::Rejected(rejection) => Err(BookingError::Rejected(rejection)),
        }
    }

    async fn on_update(
        &mut self,
        update: BookingUpdate,
        _listings: &ListingClient,
    ) -> Result<(), Self::Error> {
        check_note(update.note.as_deref())?;
        self.note = update.note;
        Ok(())
    }

    /// Frees the slot so the window can be booked again.
    async fn on_delete(&self, listings: &ListingClient) -> Result<(), Self::Error> {
        let released = listings
            .release(self.listing_id, self.id)
            .await
            .map_err(|e| BookingError::ActorCommunicationError(e.to_string()))?;
        if !released {
            warn!(booking_id = %self.id, listing_id = %self.listing_id, "No slot held");
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _listings: &ListingClient) -> Result<(), Self::Error> {
        Ok(())
    }
}
