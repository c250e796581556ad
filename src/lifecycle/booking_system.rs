use crate::clients::{BookingClient, ListingClient};
use crate::config::BookingConfig;
use tracing::{error, info};

/// The runtime orchestrator for the booking system.
///
/// `BookingSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both actors
/// - **Dependency Wiring**: The Booking actor reserves slots through a `ListingClient`
///
/// # Architecture
///
/// - **Listing Actor**: venues and services, their operating hours and calendars.
///   Validation and reservation happen here, one request at a time.
/// - **Booking Actor**: booking records; each one holds a slot on a listing.
///
/// # Example
///
/// ```ignore
/// let system = BookingSystem::new();
///
/// let hall = system.listing_client.create_listing(params).await?;
/// let booking_id = system.booking_client.create_booking(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BookingSystem {
    /// Client for interacting with the Listing actor
    pub listing_client: ListingClient,

    /// Client for interacting with the Booking actor
    pub booking_client: BookingClient,

    /// Task handles for both running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BookingSystem {
    /// Starts both actors with the default configuration.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(&BookingConfig::default())
    }

    /// Starts both actors with channels of `config.channel_capacity`.
    pub fn with_config(config: &BookingConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (listing_actor, listing_client) = crate::listing_actor::new(config.channel_capacity);
        let (booking_actor, booking_client) = crate::booking_actor::new(config.channel_capacity);

        // 2. Start actors with injected context
        let listing_handle = tokio::spawn(listing_actor.run(()));
        let booking_handle = tokio::spawn(booking_actor.run(listing_client.clone()));

        info!(capacity = config.channel_capacity, "Booking system started");

        Self {
            listing_client,
            booking_client,
            handles: vec![listing_handle, booking_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the channels; each actor drains its queue and exits.
    /// The Booking actor holds a `ListingClient` clone, so the Listing actor stops only
    /// after the Booking actor has.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both actors shut down cleanly
    /// - `Err(String)` if an actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.booking_client);
        drop(self.listing_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BookingSystem {
    fn default() -> Self {
        Self::new()
    }
}
