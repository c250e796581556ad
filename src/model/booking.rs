use crate::booking_actor::BookingError;
use crate::model::{ListingId, ListingKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub u32);

impl From<u32> for BookingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "booking_{}", self.0)
    }
}

/// A request to book `listing_id` over `[start, end)`.
///
/// This is the schema enforced at the service boundary: unknown fields are
/// rejected and `kind` must be `"venue"` or `"service"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRequest {
    pub kind: ListingKind,
    pub listing_id: ListingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

impl BookingRequest {
    /// Parses and schema-checks a JSON request body.
    pub fn from_json(body: &str) -> Result<Self, BookingError> {
        serde_json::from_str(body).map_err(|e| BookingError::InvalidRequest(e.to_string()))
    }
}

/// A slot held in a listing's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub booking_id: BookingId,
    pub kind: ListingKind,
    pub listing_id: ListingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A confirmed booking of a listing for a time window.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Booking`](#impl-ActorEntity-for-Booking) for details on:
/// - Creation parameters ([`BookingRequest`])
/// - Update parameters ([`BookingUpdate`])
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub kind: ListingKind,
    pub listing_id: ListingId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub note: Option<String>,
    /// Set once the listing accepts the slot.
    pub duration_hours: f64,
}

impl Booking {
    /// Builds the booking for a request; the duration is filled in on acceptance.
    pub fn new(id: BookingId, request: BookingRequest) -> Self {
        Self {
            id,
            kind: request.kind,
            listing_id: request.listing_id,
            start: request.start,
            end: request.end,
            note: request.note,
            duration_hours: 0.0,
        }
    }

    /// The request this booking was created from.
    pub fn request(&self) -> BookingRequest {
        BookingRequest {
            kind: self.kind,
            listing_id: self.listing_id,
            start: self.start,
            end: self.end,
            note: self.note.clone(),
        }
    }
}

/// Payload for updating a booking. Only the note is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub note: Option<String>,
}
