use actor_framework::ActorClient;
use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc, Weekday};
use venue_booking::booking_actor::BookingError;
use venue_booking::lifecycle::BookingSystem;
use venue_booking::listing_actor::ListingError;
use venue_booking::model::{BookingId, BookingRequest, ListingCreate, ListingId, ListingKind};
use venue_booking::policy::{Rejection, ValidationResult};

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, h, m, 0).unwrap()
}

fn listing(kind: ListingKind, open: Option<&str>, close: Option<&str>) -> ListingCreate {
    ListingCreate {
        kind,
        name: "Harbour Hall".to_string(),
        open: open.map(str::to_string),
        close: close.map(str::to_string),
        operating_days: Vec::new(),
        utc_offset_minutes: 0,
    }
}

fn request(id: ListingId, start: DateTime<Utc>, end: DateTime<Utc>) -> BookingRequest {
    BookingRequest {
        kind: ListingKind::Venue,
        listing_id: id,
        start,
        end,
        note: None,
    }
}

async fn nine_to_six(system: &BookingSystem) -> ListingId {
    system
        .listing_client
        .create_listing(listing(ListingKind::Venue, Some("09:00"), Some("18:00")))
        .await
        .expect("Failed to create listing")
}

/// Full end-to-end run with both real actors: one listing, open 09:00–18:00,
/// already holding 13:00–14:00.
#[tokio::test]
async fn test_booking_scenario_end_to_end() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let first = system
        .booking_client
        .create_booking(request(hall, at(13, 0), at(14, 0)))
        .await
        .expect("Failed to create booking");

    let overlap = system
        .booking_client
        .create_booking(request(hall, at(12, 30), at(13, 30)))
        .await;
    assert_eq!(overlap.unwrap_err(), BookingError::Rejected(Rejection::Overlap));

    let after_close = system
        .booking_client
        .create_booking(request(hall, at(18, 0), at(19, 0)))
        .await
        .unwrap_err();
    assert!(matches!(
        after_close,
        BookingError::Rejected(Rejection::OutOfHours { .. })
    ));
    assert_eq!(
        after_close.to_string(),
        "Bookings are only allowed between 9:00 AM – 6:00 PM"
    );

    let before_open = system
        .booking_client
        .create_booking(request(hall, at(8, 0), at(9, 30)))
        .await
        .unwrap_err();
    assert_eq!(before_open.http_status(), 400);

    let second = system
        .booking_client
        .create_booking(request(hall, at(14, 0), at(15, 0)))
        .await
        .expect("Touching booking should be accepted");

    let booking = system
        .booking_client
        .get(second)
        .await
        .expect("Failed to get booking")
        .expect("Booking not found");
    assert_eq!(booking.duration_hours, 1.0);
    assert_eq!(booking.listing_id, hall);

    // Rejected requests left nothing behind
    let bookings = system.booking_client.list().await.unwrap();
    assert_eq!(bookings.len(), 2);

    let calendar = system.listing_client.calendar(hall).await.unwrap();
    let held: Vec<_> = calendar.iter().map(|r| r.booking_id).collect();
    assert_eq!(held, vec![first, second]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_adjacent_windows_do_not_conflict() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    for (start, end) in [(at(9, 0), at(10, 0)), (at(10, 0), at(11, 0))] {
        system
            .booking_client
            .create_booking(request(hall, start, end))
            .await
            .expect("Adjacent booking should be accepted");
    }

    let overlapping = system
        .listing_client
        .find_overlapping(ListingKind::Venue, hall, at(9, 30), at(10, 30))
        .await
        .unwrap();
    assert_eq!(overlapping.len(), 2);

    let clear = system
        .listing_client
        .find_overlapping(ListingKind::Venue, hall, at(11, 0), at(12, 0))
        .await
        .unwrap();
    assert!(clear.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fractional_durations_are_rounded() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let id = system
        .booking_client
        .create_booking(request(hall, at(10, 0), at(10, 20)))
        .await
        .unwrap();
    let booking = system.booking_client.get(id).await.unwrap().unwrap();
    assert_eq!(booking.duration_hours, 0.33);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_listing_and_wrong_kind_are_not_found() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let missing = system
        .booking_client
        .create_booking(request(ListingId(99), at(10, 0), at(11, 0)))
        .await
        .unwrap_err();
    assert_eq!(missing, BookingError::Rejected(Rejection::ResourceNotFound));
    assert_eq!(missing.http_status(), 404);

    let mut as_service = request(hall, at(10, 0), at(11, 0));
    as_service.kind = ListingKind::Service;
    let wrong_kind = system.booking_client.create_booking(as_service).await;
    assert_eq!(
        wrong_kind.unwrap_err(),
        BookingError::Rejected(Rejection::ResourceNotFound)
    );

    let hours = system
        .listing_client
        .lookup(ListingKind::Service, hall)
        .await
        .unwrap();
    assert!(hours.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_lookup_returns_hours_days_and_offset() {
    let system = BookingSystem::new();
    let mut params = listing(ListingKind::Service, Some("08:30"), Some("17:00"));
    params.operating_days = vec![Weekday::Mon, Weekday::Fri];
    params.utc_offset_minutes = 60;
    let studio = system.listing_client.create_listing(params).await.unwrap();

    let found = system
        .listing_client
        .lookup(ListingKind::Service, studio)
        .await
        .unwrap()
        .expect("Listing hours not found");

    assert_eq!(
        found.hours.bounds(),
        Some((
            NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        ))
    );
    assert_eq!(found.operating_days, vec![Weekday::Mon, Weekday::Fri]);
    assert_eq!(found.utc_offset, FixedOffset::east_opt(3600).unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reserve_naming_another_listing_cannot_double_book() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let first = system
        .listing_client
        .reserve(hall, BookingId(1), request(hall, at(13, 0), at(14, 0)))
        .await
        .unwrap();
    assert_eq!(first, ValidationResult::Accepted { duration_hours: 1.0 });

    let second = system
        .listing_client
        .reserve(hall, BookingId(2), request(ListingId(77), at(13, 0), at(14, 0)))
        .await
        .unwrap();
    assert_eq!(second, ValidationResult::Rejected(Rejection::ResourceNotFound));

    let calendar = system.listing_client.calendar(hall).await.unwrap();
    assert_eq!(calendar.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listing_without_hours_refuses_bookings() {
    let system = BookingSystem::new();
    let pending = system
        .listing_client
        .create_listing(listing(ListingKind::Venue, Some("09:00"), None))
        .await
        .unwrap();

    let result = system
        .booking_client
        .create_booking(request(pending, at(10, 0), at(11, 0)))
        .await
        .unwrap_err();
    assert_eq!(result, BookingError::Rejected(Rejection::HoursNotConfigured));
    assert_eq!(result.http_status(), 500);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_window_is_invalid() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let result = system
        .booking_client
        .create_booking(request(hall, at(11, 0), at(11, 0)))
        .await
        .unwrap_err();
    assert_eq!(result, BookingError::Rejected(Rejection::InvalidWindow));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hours_are_read_in_listing_offset() {
    let system = BookingSystem::new();
    let mut params = listing(ListingKind::Venue, Some("09:00"), Some("18:00"));
    params.utc_offset_minutes = -5 * 60;
    let hall = system.listing_client.create_listing(params).await.unwrap();

    // 14:00Z is 09:00 at UTC-05:00
    system
        .booking_client
        .create_booking(request(hall, at(14, 0), at(15, 0)))
        .await
        .expect("09:00 local should be inside hours");

    let early = system
        .booking_client
        .create_booking(request(hall, at(13, 0), at(14, 0)))
        .await
        .unwrap_err();
    assert!(matches!(
        early,
        BookingError::Rejected(Rejection::OutOfHours { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_frees_the_slot() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let id = system
        .booking_client
        .create_booking(request(hall, at(10, 0), at(12, 0)))
        .await
        .unwrap();

    // A listing holding reservations cannot be removed
    let refused = system.listing_client.delete(hall).await.unwrap_err();
    assert_eq!(refused, ListingError::HasReservations(1));

    system.booking_client.cancel_booking(id).await.unwrap();
    assert!(system.booking_client.get(id).await.unwrap().is_none());

    system
        .booking_client
        .create_booking(request(hall, at(11, 0), at(12, 0)))
        .await
        .expect("Window should be free after cancellation");

    let again = system.booking_client.cancel_booking(id).await.unwrap_err();
    assert!(matches!(again, BookingError::NotFound(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_note() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let id = system
        .booking_client
        .create_booking(request(hall, at(10, 0), at(11, 0)))
        .await
        .unwrap();

    let updated = system
        .booking_client
        .update_note(id, Some("bring projector".into()))
        .await
        .unwrap();
    assert_eq!(updated.note.as_deref(), Some("bring projector"));

    let too_long = system
        .booking_client
        .update_note(id, Some("x".repeat(501)))
        .await
        .unwrap_err();
    assert!(matches!(too_long, BookingError::ValidationError(_)));

    let stored = system.booking_client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.note.as_deref(), Some("bring projector"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_listing_update_rejects_overnight_hours() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let update = venue_booking::model::ListingUpdate {
        close: Some("02:00".into()),
        ..Default::default()
    };
    let result = system.listing_client.update_listing(hall, update).await;
    assert!(matches!(result, Err(ListingError::OvernightHours { .. })));

    let missing = system
        .listing_client
        .update_listing(ListingId(42), Default::default())
        .await;
    assert!(matches!(missing, Err(ListingError::NotFound(_))));

    system.shutdown().await.unwrap();
}

/// Many clients racing for the same window: the listing actor serializes the
/// check and the insert, so exactly one wins.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_never_double_book() {
    let system = BookingSystem::new();
    let hall = nine_to_six(&system).await;

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = system.booking_client.clone();
        // staggered windows that all cover 11:00–11:30
        let start = at(10, 30 + (i % 3));
        handles.push(tokio::spawn(async move {
            client.create_booking(request(hall, start, at(11, 30))).await
        }));
    }

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(e) => assert_eq!(e, BookingError::Rejected(Rejection::Overlap)),
        }
    }
    assert_eq!(accepted, 1);

    let calendar = system.listing_client.calendar(hall).await.unwrap();
    assert_eq!(calendar.len(), 1);

    system.shutdown().await.unwrap();
}
