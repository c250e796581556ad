//! Custom actions for the Listing actor.
//!
//! These are the directory and reservation-store operations a listing supports
//! beyond CRUD. They are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action); see
//! [`impl ActorEntity for Listing`](crate::model::Listing#impl-ActorEntity-for-Listing).

use crate::model::{BookingId, BookingRequest, ListingHours, ListingKind, Reservation};
use crate::policy::ValidationResult;
use chrono::{DateTime, Utc};

/// Custom actions for Listing entities.
#[derive(Debug, Clone)]
pub enum ListingAction {
    /// Operating hours and days, if the listing is of `kind`.
    Lookup { kind: ListingKind },
    /// Reservations of `kind` intersecting `[start, end)`.
    FindOverlapping {
        kind: ListingKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Validates `request` against the listing and, when accepted, records the
    /// reservation under `booking_id` before replying.
    Reserve {
        booking_id: BookingId,
        request: BookingRequest,
    },
    /// Frees the slot held by `booking_id`.
    Release { booking_id: BookingId },
    /// Every reservation, earliest first.
    Calendar,
}

/// Results from ListingActions - variants match 1:1 with ListingAction
#[derive(Debug, Clone)]
pub enum ListingActionResult {
    /// `None` when the listing exists but is of another kind
    Lookup(Option<ListingHours>),
    FindOverlapping(Vec<Reservation>),
    /// Rejections are reported here, not as errors
    Reserve(ValidationResult),
    /// `false` when the booking held no slot
    Release(bool),
    Calendar(Vec<Reservation>),
}
