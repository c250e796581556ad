//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod booking;
pub mod listing;

pub use booking::*;
pub use listing::*;
