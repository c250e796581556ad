//! # Booking Interval Validation
//!
//! Decides whether a requested window may be booked on a listing, given its
//! operating hours and the reservations it already holds.
//!
//! [`validate`] is a pure function: the same inputs always give the same
//! [`ValidationResult`]. Persisting an accepted reservation is the caller's job; the
//! listing actor does both inside one message so no other request can slip in between.
//!
//! Rules, in order:
//!
//! 1. `end <= start` → [`Rejection::InvalidWindow`]
//! 2. open or close missing → [`Rejection::HoursNotConfigured`]
//! 3. wall-clock time of `start` before open, of `end` after close, or a window that
//!    spans more than one local day → [`Rejection::OutOfHours`]. Only the time of day
//!    is compared with the hours. Overnight hours are refused when a listing is
//!    configured, so a window that crosses local midnight can never fit; checking the
//!    dates keeps a multi-day window from passing on its minutes alone.
//! 4. any reservation on the same listing with `existing.start < end && existing.end > start`
//!    → [`Rejection::Overlap`] (touching endpoints are fine)
//! 5. otherwise [`ValidationResult::Accepted`] with the duration in hours, 2 decimals

use crate::model::{BookingRequest, OperatingHours, Reservation};
use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Accepted { duration_hours: f64 },
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted { .. })
    }
}

/// Why a booking was refused. The `Display` text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("End time must be after start time")]
    InvalidWindow,
    #[error("Bookings are only allowed between {} – {}", format_12h(.open), format_12h(.close))]
    OutOfHours { open: NaiveTime, close: NaiveTime },
    #[error("The requested time overlaps an existing booking")]
    Overlap,
    #[error("Listing not found")]
    ResourceNotFound,
    #[error("Operating hours are not configured for this listing")]
    HoursNotConfigured,
}

impl Rejection {
    /// Status an HTTP layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Rejection::InvalidWindow | Rejection::OutOfHours { .. } => 400,
            Rejection::ResourceNotFound => 404,
            Rejection::Overlap => 409,
            Rejection::HoursNotConfigured => 500,
        }
    }
}

/// Validates `request` against a listing's hours and existing reservations.
///
/// `offset` is the listing's zone: the hour and minute of `start` and `end` are read
/// in it before comparing against the operating hours.
pub fn validate(
    request: &BookingRequest,
    hours: &OperatingHours,
    offset: FixedOffset,
    existing: &[Reservation],
) -> ValidationResult {
    if request.end <= request.start {
        return ValidationResult::Rejected(Rejection::InvalidWindow);
    }

    let Some((open, close)) = hours.bounds() else {
        return ValidationResult::Rejected(Rejection::HoursNotConfigured);
    };

    if !within_hours(request.start, request.end, open, close, offset) {
        return ValidationResult::Rejected(Rejection::OutOfHours { open, close });
    }

    let conflict = existing.iter().any(|r| {
        r.kind == request.kind
            && r.listing_id == request.listing_id
            && overlaps(r.start, r.end, request.start, request.end)
    });
    if conflict {
        return ValidationResult::Rejected(Rejection::Overlap);
    }

    ValidationResult::Accepted {
        duration_hours: duration_hours(request.start, request.end),
    }
}

fn within_hours(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    open: NaiveTime,
    close: NaiveTime,
    offset: FixedOffset,
) -> bool {
    // No overnight windows: both ends must fall on the same local day.
    if start.with_timezone(&offset).date_naive() != end.with_timezone(&offset).date_naive() {
        return false;
    }
    minutes_of_day(start, offset) >= clock_minutes(open)
        && minutes_of_day(end, offset) <= clock_minutes(close)
}

/// Open-interval intersection: `[a_start, a_end)` and `[b_start, b_end)` share time.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Minutes since local midnight of `instant` read in `offset`. Seconds are ignored.
pub fn minutes_of_day(instant: DateTime<Utc>, offset: FixedOffset) -> u32 {
    clock_minutes(instant.with_timezone(&offset).time())
}

fn clock_minutes(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Elapsed hours between `start` and `end`, rounded to 2 decimal places.
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    (millis / 3_600_000.0 * 100.0).round() / 100.0
}

/// `9:00 AM`, `12:30 PM`, ...
pub fn format_12h(time: &NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
