//! Calendar event shapes as returned by the platform API
//!
//! Only the fields the review projection reads are modelled. Unknown fields
//! (exam, activity, penalty, `__typename`, ...) are ignored on decode.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::REVIEW_EVENT_CODE;

/// Calendar event from the `calendarEventS21` API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_slots: Vec<EventSlot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bookings: Vec<CalendarBooking>,
}

impl CalendarEvent {
    /// Whether this event belongs to peer-review scheduling
    pub fn is_review(&self) -> bool {
        self.event_code.as_deref() == Some(REVIEW_EVENT_CODE)
    }
}

/// Time slot attached to a calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot {
    pub id: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub slot_type: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub school: Option<SchoolRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_name: String,
}

/// Booking made against one of the event's slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarBooking {
    pub id: String,
    #[serde(default)]
    pub event_slot_id: Option<String>,
    pub event_slot: BookedSlot,
    #[serde(default)]
    pub task: Option<BookingTask>,
    #[serde(default)]
    pub verifier_user: Option<BookingUser>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_online: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_status: String,
}

/// Slot fields echoed inside a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub id: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_event_and_ignores_unmodelled_fields() {
        let raw = serde_json::json!({
            "id": "evt-1",
            "start": "2025-03-01T10:00:00Z",
            "end": "2025-03-01T12:00:00Z",
            "eventCode": "student_check",
            "exam": null,
            "__typename": "CalendarEvent",
            "eventSlots": [{
                "id": "slot-1",
                "type": "FREE_TIME",
                "start": "2025-03-01T10:00:00Z",
                "end": "2025-03-01T10:30:00Z",
                "school": { "shortName": "21 Moscow", "__typename": "SafeSchool" }
            }],
            "bookings": []
        });

        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert!(event.is_review());
        assert_eq!(event.event_slots[0].slot_type, "FREE_TIME");
        assert_eq!(event.event_slots[0].school.as_ref().unwrap().short_name, "21 Moscow");
    }

    #[test]
    fn missing_event_code_is_not_a_review() {
        let raw = serde_json::json!({
            "id": "evt-2",
            "start": "2025-03-01T10:00:00Z",
            "end": "2025-03-01T12:00:00Z"
        });

        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert!(!event.is_review());
        assert!(event.event_slots.is_empty());
        assert!(event.bookings.is_empty());
    }

    #[test]
    fn null_collections_and_strings_decode_as_empty() {
        let raw = serde_json::json!({
            "id": "evt-3",
            "start": "2025-03-01T10:00:00Z",
            "end": "2025-03-01T12:00:00Z",
            "eventSlots": null,
            "bookings": [{
                "id": "booking-1",
                "eventSlot": { "id": "slot-1", "start": "2025-03-01T10:00:00Z", "end": "2025-03-01T10:30:00Z" },
                "task": null,
                "verifierUser": { "login": null },
                "isOnline": null,
                "bookingStatus": null
            }]
        });

        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert!(event.event_slots.is_empty());
        let booking = &event.bookings[0];
        assert!(booking.task.is_none());
        assert_eq!(booking.verifier_user.as_ref().unwrap().login, "");
        assert!(!booking.is_online);
        assert_eq!(booking.booking_status, "");
    }

    #[test]
    fn null_slot_type_decodes_as_empty() {
        let raw = serde_json::json!({
            "id": "evt-4",
            "start": "2025-03-01T10:00:00Z",
            "end": "2025-03-01T12:00:00Z",
            "eventSlots": [
                { "id": "slot-1", "type": null, "start": "2025-03-01T10:00:00Z", "end": "2025-03-01T10:30:00Z" },
                { "id": "slot-2", "start": "2025-03-01T10:30:00Z", "end": "2025-03-01T11:00:00Z" }
            ]
        });

        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.event_slots.len(), 2);
        assert!(event.event_slots.iter().all(|slot| slot.slot_type.is_empty()));
    }
}
