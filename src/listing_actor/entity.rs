//! ActorEntity trait implementation for the Listing domain type.
//!
//! Operating hours are parsed and checked here, when a listing is created or
//! updated, so that the validator only ever sees well-formed hours. The `Reserve`
//! action runs [`policy::validate`] against the calendar and records the slot in the
//! same step.

use super::actions::{ListingAction, ListingActionResult};
use super::error::ListingError;
use crate::model::{
    BookingId, BookingRequest, Listing, ListingCreate, ListingHours, ListingId, ListingUpdate,
    OperatingHours, Reservation,
};
use crate::policy::{self, Rejection, ValidationResult};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{FixedOffset, NaiveTime};
use tracing::debug;

/// Parses an `"HH:MM"` time of day.
pub fn parse_clock(text: &str) -> Result<NaiveTime, ListingError> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map_err(|_| ListingError::InvalidClock(text.to_string()))
}

fn parse_optional_clock(text: Option<&str>) -> Result<Option<NaiveTime>, ListingError> {
    text.map(parse_clock).transpose()
}

fn check_hours(hours: &OperatingHours) -> Result<(), ListingError> {
    match hours.bounds() {
        Some((open, close)) if close <= open => Err(ListingError::OvernightHours { open, close }),
        _ => Ok(()),
    }
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ListingError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ListingError::InvalidOffset(minutes))
}

fn check_name(name: &str) -> Result<(), ListingError> {
    if name.trim().is_empty() {
        return Err(ListingError::EmptyName);
    }
    Ok(())
}

impl Listing {
    /// The directory view of this listing.
    pub fn hours_view(&self) -> ListingHours {
        ListingHours {
            hours: self.hours,
            operating_days: self.operating_days.clone(),
            utc_offset: self.utc_offset,
        }
    }

    fn reserve(&mut self, booking_id: BookingId, request: BookingRequest) -> ValidationResult {
        // Venues and services share ids; the wrong kind is a different resource.
        // The calendar only holds this listing's slots, so a request naming another
        // listing could never be checked for overlap.
        if request.kind != self.kind || request.listing_id != self.id {
            return ValidationResult::Rejected(Rejection::ResourceNotFound);
        }

        let result = policy::validate(&request, &self.hours, self.utc_offset, &self.calendar);
        if result.is_accepted() {
            self.calendar.push(Reservation {
                booking_id,
                kind: self.kind,
                listing_id: self.id,
                start: request.start,
                end: request.end,
            });
            debug!(listing_id = %self.id, %booking_id, held = self.calendar.len(), "Slot reserved");
        }
        result
    }

    fn release(&mut self, booking_id: BookingId) -> bool {
        let before = self.calendar.len();
        self.calendar.retain(|r| r.booking_id != booking_id);
        before != self.calendar.len()
    }

    fn sorted_calendar(&self) -> Vec<Reservation> {
        let mut calendar = self.calendar.clone();
        calendar.sort_by_key(|r| r.start);
        calendar
    }
}

#[async_trait]
impl ActorEntity for Listing {
    type Id = ListingId;
    type Create = ListingCreate;
    type Update = ListingUpdate;
    type Action = ListingAction;
    type ActionResult = ListingActionResult;
    type Context = ();
    type Error = ListingError;

    /// Creates a new Listing, rejecting malformed hours, overnight hours and
    /// out-of-range offsets.
    fn from_create_params(id: ListingId, params: ListingCreate) -> Result<Self, Self::Error> {
        check_name(&params.name)?;
        let hours = OperatingHours {
            open: parse_optional_clock(params.open.as_deref())?,
            close: parse_optional_clock(params.close.as_deref())?,
        };
        check_hours(&hours)?;

        Ok(Self {
            id,
            kind: params.kind,
            name: params.name,
            hours,
            operating_days: params.operating_days,
            utc_offset: offset_from_minutes(params.utc_offset_minutes)?,
            calendar: Vec::new(),
        })
    }

    /// Applies the update only if every provided field is valid.
    ///
    /// Existing reservations are kept as they are, even if new hours would exclude them.
    async fn on_update(&mut self, update: ListingUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let mut hours = self.hours;
        if let Some(open) = update.open.as_deref() {
            hours.open = Some(parse_clock(open)?);
        }
        if let Some(close) = update.close.as_deref() {
            hours.close = Some(parse_clock(close)?);
        }
        check_hours(&hours)?;
        if let Some(name) = &update.name {
            check_name(name)?;
        }

        self.hours = hours;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(days) = update.operating_days {
            self.operating_days = days;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.calendar.is_empty() {
            Ok(())
        } else {
            Err(ListingError::HasReservations(self.calendar.len()))
        }
    }

    async fn handle_action(
        &mut self,
        action: ListingAction,
        _ctx: &(),
    ) -> Result<ListingActionResult, Self::Error> {
        let result = match action {
            ListingAction::Lookup { kind } => {
                ListingActionResult::Lookup((kind == self.kind).then(|| self.hours_view()))
            }
            ListingAction::FindOverlapping { kind, start, end } => {
                let overlapping = self
                    .sorted_calendar()
                    .into_iter()
                    .filter(|r| r.kind == kind && policy::overlaps(r.start, r.end, start, end))
                    .collect();
                ListingActionResult::FindOverlapping(overlapping)
            }
            ListingAction::Reserve {
                booking_id,
                request,
            } => ListingActionResult::Reserve(self.reserve(booking_id, request)),
            ListingAction::Release { booking_id } => {
                ListingActionResult::Release(self.release(booking_id))
            }
            ListingAction::Calendar => ListingActionResult::Calendar(self.sorted_calendar()),
        };
        Ok(result)
    }
}
