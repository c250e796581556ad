use crate::model::Reservation;
use chrono::{FixedOffset, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Listings. Venues and services share one id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub u32);

impl From<u32> for ListingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listing_{}", self.0)
    }
}

/// What kind of resource a listing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Venue,
    Service,
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Venue => f.write_str("venue"),
            ListingKind::Service => f.write_str("service"),
        }
    }
}

/// Daily window during which a listing accepts bookings.
///
/// Either bound may be missing on a listing that has not been fully set up;
/// such a listing rejects every booking with `HoursNotConfigured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatingHours {
    pub open: Option<NaiveTime>,
    pub close: Option<NaiveTime>,
}

impl OperatingHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            open: Some(open),
            close: Some(close),
        }
    }

    /// Both bounds, if both are configured.
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.open.zip(self.close)
    }
}

/// A bookable venue or service.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// The listing actor doubles as the resource directory (operating hours) and the
/// reservation store (the `calendar`).
///
/// See [`impl ActorEntity for Listing`](#impl-ActorEntity-for-Listing) for details on:
/// - Creation parameters ([`ListingCreate`])
/// - Update parameters ([`ListingUpdate`])
/// - Custom actions ([`ListingAction`](crate::listing_actor::ListingAction))
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub kind: ListingKind,
    pub name: String,
    pub hours: OperatingHours,
    /// Informational only; bookings are not filtered by weekday.
    pub operating_days: Vec<Weekday>,
    /// Zone in which booking instants are read as wall-clock time.
    pub utc_offset: FixedOffset,
    /// Accepted reservations, in insertion order.
    pub calendar: Vec<Reservation>,
}

/// Directory view of a listing: what a booking is validated against.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingHours {
    pub hours: OperatingHours,
    pub operating_days: Vec<Weekday>,
    pub utc_offset: FixedOffset,
}

/// Payload for creating a new listing.
///
/// `open` and `close` are `"HH:MM"` strings; `utc_offset_minutes` is the listing's
/// local offset from UTC (e.g. `-300` for UTC-05:00).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingCreate {
    pub kind: ListingKind,
    pub name: String,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub operating_days: Vec<Weekday>,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Payload for updating an existing listing. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingUpdate {
    pub name: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub operating_days: Option<Vec<Weekday>>,
}
