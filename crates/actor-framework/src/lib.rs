//! # Actor Framework
//!
//! Building blocks for type-safe, resource-oriented actors on Tokio.
//!
//! Each resource type (a listing, a booking, ...) gets its own [`ResourceActor`]
//! running in its own task. The actor owns its entities outright and handles one
//! request at a time, so entity state needs no locks and a multi-step operation
//! inside one request is atomic with respect to every other request to that actor.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business logic. Associated types fix the
//!    payload of every operation; lifecycle hooks (`on_create`, `on_update`,
//!    `on_delete`) and `handle_action` hold the rules.
//! 2. **Runtime** ([`ResourceActor`]): the message loop, id assignment, the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls over
//!    `mpsc`, with replies over `oneshot`.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)` rather than `new()`. All actors can be
//! constructed first and wired afterwards:
//!
//! ```rust,ignore
//! let (listing_actor, listing_client) = ResourceActor::<Listing>::new(32);
//! let (booking_actor, booking_client) = ResourceActor::<Booking>::new(32);
//!
//! tokio::spawn(listing_actor.run(()));
//! // bookings reserve slots through the listing actor
//! tokio::spawn(booking_actor.run(ListingClient::new(listing_client)));
//! ```
//!
//! ## Errors
//!
//! Hooks fail with the entity's own `Error` type. It reaches the caller boxed in
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! See the [`mock`] module for scripted clients that answer without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
