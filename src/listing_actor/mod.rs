//! Listing-specific resource logic: the directory of operating hours and the
//! calendar of reserved slots.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ListingClient;
use crate::model::Listing;
use actor_framework::ResourceActor;

/// Creates a new Listing actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Listing>, ListingClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    let client = ListingClient::new(generic_client);

    (actor, client)
}
