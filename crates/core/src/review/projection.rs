//! Review-slot projection
//!
//! Reduces calendar events into review slots and bookings. Only events whose
//! `eventCode` marks them as peer-review scheduling contribute; everything
//! else (exams, activities, ...) is skipped. Output order follows event
//! order, then slot/booking order inside each event. Nothing is sorted.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use s21_common::time::parse_wire_timestamp;
use s21_domain::{
    CalendarBooking, CalendarEvent, ClientError, EventSlot, Result, ReviewBooking,
    ReviewSchedule, ReviewSlot, SlotType,
};
use tracing::debug;

/// Project every review event into slots and bookings
///
/// # Errors
/// Returns `ClientError::Decode` if a slot or booking carries a timestamp
/// that is not RFC 3339.
pub fn project_events(events: &[CalendarEvent]) -> Result<ReviewSchedule> {
    let mut schedule = ReviewSchedule::default();
    let mut review_events = 0usize;

    for event in events.iter().filter(|event| event.is_review()) {
        review_events += 1;

        for slot in &event.event_slots {
            schedule.slots.push(project_slot(slot)?);
        }
        for booking in &event.bookings {
            schedule.bookings.push(project_booking(booking)?);
        }
    }

    debug!(
        events = events.len(),
        review_events,
        slots = schedule.slots.len(),
        bookings = schedule.bookings.len(),
        "Projected review schedule"
    );

    Ok(schedule)
}

/// Project one event slot
///
/// Raw slots carry no online flag, so `is_online` is always `false`. A
/// missing school projects to an empty string.
///
/// # Errors
/// Returns `ClientError::Decode` on an unparseable start/end.
pub fn project_slot(slot: &EventSlot) -> Result<ReviewSlot> {
    Ok(ReviewSlot {
        id: slot.id.clone(),
        start: parse_field(&slot.start, "slot", &slot.id, "start")?,
        end: parse_field(&slot.end, "slot", &slot.id, "end")?,
        slot_type: SlotType::from(slot.slot_type.as_str()),
        is_online: false,
        school: slot.school.as_ref().map(|school| school.short_name.clone()).unwrap_or_default(),
    })
}

/// Project one booking, taking its times from the booked slot
///
/// # Errors
/// Returns `ClientError::Decode` on an unparseable start/end.
pub fn project_booking(booking: &CalendarBooking) -> Result<ReviewBooking> {
    Ok(ReviewBooking {
        id: booking.id.clone(),
        slot_id: booking.event_slot.id.clone(),
        start: parse_field(&booking.event_slot.start, "booking", &booking.id, "start")?,
        end: parse_field(&booking.event_slot.end, "booking", &booking.id, "end")?,
        project_name: booking.task.as_ref().map(|task| task.goal_name.clone()).unwrap_or_default(),
        verifier_login: booking
            .verifier_user
            .as_ref()
            .map(|user| user.login.clone())
            .unwrap_or_default(),
        is_online: booking.is_online,
        status: booking.booking_status.clone(),
    })
}

/// Keep only free-time slots
pub fn available_slots(slots: Vec<ReviewSlot>) -> Vec<ReviewSlot> {
    slots.into_iter().filter(|slot| slot.slot_type.is_free()).collect()
}

/// Deduplicate bookings by id; the first occurrence wins and order is kept
pub fn dedup_bookings(bookings: Vec<ReviewBooking>) -> Vec<ReviewBooking> {
    let mut seen = HashSet::with_capacity(bookings.len());
    bookings.into_iter().filter(|booking| seen.insert(booking.id.clone())).collect()
}

/// Find and project the slot with `slot_id` inside a mutation echo
///
/// # Errors
/// Returns `ClientError::NotFound` if the event has no slot with that id,
/// or `ClientError::Decode` if the matching slot has bad timestamps.
pub fn find_slot(event: &CalendarEvent, slot_id: &str) -> Result<ReviewSlot> {
    event
        .event_slots
        .iter()
        .find(|slot| slot.id == slot_id)
        .ok_or_else(|| {
            ClientError::NotFound(format!("slot {slot_id} missing from updated event {}", event.id))
        })
        .and_then(project_slot)
}

fn parse_field(raw: &str, kind: &str, id: &str, field: &str) -> Result<DateTime<Utc>> {
    parse_wire_timestamp(raw)
        .map_err(|e| ClientError::Decode(format!("{kind} {id} has invalid {field} {raw:?}: {e}")))
}
