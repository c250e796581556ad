//! Error types for the Listing actor.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors that can occur during listing operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListingError {
    /// The requested listing was not found.
    #[error("Listing not found: {0}")]
    NotFound(String),

    /// A listing needs a display name.
    #[error("Listing name must not be empty")]
    EmptyName,

    /// An opening or closing time is not a valid `HH:MM` time of day.
    #[error("Invalid time of day {0:?}, expected HH:MM")]
    InvalidClock(String),

    /// Closing time is not after opening time.
    #[error("Closing time {close} must be after opening time {open}; overnight hours are not supported")]
    OvernightHours { open: NaiveTime, close: NaiveTime },

    /// The UTC offset is outside ±24h.
    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),

    /// Listings holding reservations cannot be deleted.
    #[error("Listing still holds {0} reservation(s)")]
    HasReservations(usize),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
