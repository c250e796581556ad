use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn, Instrument};
use venue_booking::booking_actor::BookingError;
use venue_booking::config::BookingConfig;
use venue_booking::lifecycle::{setup_tracing, BookingSystem};
use venue_booking::model::{BookingRequest, ListingCreate, ListingKind};

#[derive(Parser)]
#[command(name = "venue-booking")]
#[command(about = "Books a venue through the actor system and reports each verdict")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the default log filter from config
    #[arg(long)]
    log_filter: Option<String>,
}

/// Request bodies as they would arrive at the service boundary.
const REQUESTS: [&str; 5] = [
    r#"{"kind":"venue","listing_id":1,"start":"2025-03-14T13:00:00Z","end":"2025-03-14T14:00:00Z","note":"team lunch"}"#,
    r#"{"kind":"venue","listing_id":1,"start":"2025-03-14T12:30:00Z","end":"2025-03-14T13:30:00Z"}"#,
    r#"{"kind":"venue","listing_id":1,"start":"2025-03-14T18:00:00Z","end":"2025-03-14T19:00:00Z"}"#,
    r#"{"kind":"venue","listing_id":1,"start":"2025-03-14T08:00:00Z","end":"2025-03-14T09:30:00Z"}"#,
    r#"{"kind":"venue","listing_id":1,"start":"2025-03-14T14:00:00Z","end":"2025-03-14T15:00:00Z"}"#,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = BookingConfig::load(args.config.as_deref())?;
    setup_tracing(args.log_filter.as_deref().unwrap_or(&config.log_filter));

    info!(?config, "Starting venue booking demo");
    let system = BookingSystem::with_config(&config);

    let hall = system
        .listing_client
        .create_listing(ListingCreate {
            kind: ListingKind::Venue,
            name: "Harbour Hall".to_string(),
            open: Some("09:00".to_string()),
            close: Some("18:00".to_string()),
            operating_days: Vec::new(),
            utc_offset_minutes: 0,
        })
        .await?;
    info!(listing_id = %hall, "Listing created");

    for body in REQUESTS {
        let request = match BookingRequest::from_json(body) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, status = e.http_status(), "Malformed request");
                continue;
            }
        };

        let span = tracing::info_span!("booking_request");
        let result = system
            .booking_client
            .create_booking(request)
            .instrument(span)
            .await;

        match result {
            Ok(booking_id) => info!(%booking_id, "Booking accepted"),
            Err(BookingError::Rejected(reason)) => {
                info!(status = reason.http_status(), %reason, "Booking rejected")
            }
            Err(e) => error!(error = %e, "Booking failed"),
        }
    }

    let calendar = system.listing_client.calendar(hall).await?;
    for slot in &calendar {
        info!(booking_id = %slot.booking_id, start = %slot.start, end = %slot.end, "Reserved");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
