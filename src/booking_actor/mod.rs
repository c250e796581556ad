//! Booking-specific resource logic. Bookings hold their slot on a listing for as
//! long as they exist.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookingClient;
use crate::model::Booking;
use actor_framework::ResourceActor;

/// Creates a new Booking actor and its client.
///
/// The actor must be run with a [`ListingClient`](crate::clients::ListingClient) as
/// its context.
pub fn new(capacity: usize) -> (ResourceActor<Booking>, BookingClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = BookingClient::new(generic_client);

    (actor, client)
}
