//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. The actor loop
//! tags every line with `entity_type` ("Listing", "Booking") so module paths are hidden.
//!
//! ```bash
//! # defaults to the configured filter (`info` unless the config says otherwise)
//! cargo run
//!
//! # RUST_LOG wins over the configured filter
//! RUST_LOG=debug cargo run
//! RUST_LOG=actor_framework=debug,info cargo run
//! ```
//!
//! With `RUST_LOG=info` a booking that clears validation reads:
//!
//! ```text
//! INFO booking_request:create_booking: Sending create_booking to actor listing_id=listing_1 kind=venue
//! INFO Action ok entity_type="Listing" id=listing_1
//! INFO Created entity_type="Booking" id=booking_1 size=1
//! ```
//!
//! and one that collides with an existing slot:
//!
//! ```text
//! INFO Action ok entity_type="Listing" id=listing_1
//! WARN on_create failed entity_type="Booking" id=booking_2 error=The requested time overlaps an existing booking
//! ```
//!
//! `RUST_LOG=debug` adds the payloads (`?request`, `?params`) logged once at each entry point.

use tracing_subscriber::EnvFilter;

/// Initialises the global subscriber. `default_filter` applies when `RUST_LOG` is unset.
///
/// Panics if a global subscriber is already installed.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
