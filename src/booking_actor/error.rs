//! Error types for the Booking actor.

use crate::policy::Rejection;
use thiserror::Error;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// The listing refused the requested window.
    #[error("{0}")]
    Rejected(Rejection),

    /// The requested booking was not found.
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// The request body does not match the booking schema.
    #[error("Invalid booking request: {0}")]
    InvalidRequest(String),

    /// The booking data provided is invalid.
    #[error("Booking validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl BookingError {
    /// Status an HTTP layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            BookingError::Rejected(rejection) => rejection.http_status(),
            BookingError::NotFound(_) => 404,
            BookingError::InvalidRequest(_) | BookingError::ValidationError(_) => 400,
            BookingError::ActorCommunicationError(_) => 500,
        }
    }
}

impl From<Rejection> for BookingError {
    fn from(rejection: Rejection) -> Self {
        BookingError::Rejected(rejection)
    }
}
