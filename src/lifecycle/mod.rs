//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the two actors of the booking system.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for Listing {
//!     type Context = ();
//! }
//!
//! // reserves and releases slots on the listing actor
//! impl ActorEntity for Booking {
//!     type Context = ListingClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**, closing the sender side of the channels
//! 2. **Actors detect closure**: `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** of every actor task
//!
//! The dependency graph is acyclic (Booking → Listing), so channel closure is enough
//! to stop everything.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`](self::tracing) module.

pub mod booking_system;
pub mod tracing;

pub use self::booking_system::*;
pub use self::tracing::*;
