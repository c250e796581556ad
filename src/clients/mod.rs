//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Shared `get`/`list`/`delete` come from [`ActorClient`](actor_framework::ActorClient);
//! bring the trait into scope to call them.

pub mod booking_client;
pub mod listing_client;

pub use booking_client::*;
pub use listing_client::*;
