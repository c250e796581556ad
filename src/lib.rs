//! # Venue Booking
//!
//! Time-window bookings for venues and services, built on a resource-oriented actor
//! framework.
//!
//! ## Core Components
//!
//! - **[policy]**: the pure validator. Decides whether a window fits a listing's
//!   operating hours and its existing reservations.
//! - **[model]**: data structures ([`Listing`](model::Listing), [`Booking`](model::Booking),
//!   [`BookingRequest`](model::BookingRequest)) that implement
//!   [`ActorEntity`](actor_framework::ActorEntity).
//! - **[listing_actor]**: the directory of operating hours and the reservation store.
//!   A reservation is validated and stored in one actor message, so overlapping requests
//!   cannot both be accepted.
//! - **[booking_actor]**: booking records, which reserve their slot on creation and
//!   release it on deletion.
//! - **[clients]**: type-safe wrappers (e.g. [`BookingClient`](clients::BookingClient))
//!   that hide the message passing.
//! - **[lifecycle]**: starts, wires and stops the actors; sets up tracing.
//! - **[config]**: TOML settings.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let system = BookingSystem::new();
//! let hall = system.listing_client.create_listing(ListingCreate { .. }).await?;
//!
//! match system.booking_client.create_booking(request).await {
//!     Ok(id) => println!("booked {id}"),
//!     Err(BookingError::Rejected(reason)) => println!("{} ({})", reason, reason.http_status()),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

pub mod booking_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod listing_actor;
pub mod model;
pub mod policy;
