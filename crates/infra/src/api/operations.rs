//! Calendar operations used by review-slot scheduling
//!
//! Each operation selects the `CalendarEvent` fields the review projection
//! reads, through one shared fragment.

use s21_domain::CalendarEvent;
use serde::{Deserialize, Serialize};

use super::types::GraphQlOperation;

/// Expands to the `CalendarEvent` fragment as a string literal so it can be
/// joined onto each operation with `concat!`.
macro_rules! calendar_event_fragment {
    () => {
        r"

fragment CalendarEvent on CalendarEvent {
  id
  start
  end
  description
  eventType
  eventCode
  eventSlots {
    id
    type
    start
    end
    school {
      shortName
      __typename
    }
    __typename
  }
  bookings {
    id
    eventSlotId
    eventSlot {
      id
      start
      end
      __typename
    }
    task {
      id
      goalName
      __typename
    }
    verifierUser {
      id
      login
      __typename
    }
    isOnline
    bookingStatus
    __typename
  }
  __typename
}"
    };
}

/* -------------------------------------------------------------------------- */
/* calendarGetEvents */
/* -------------------------------------------------------------------------- */

/// Calendar events of the current user between two instants
pub struct CalendarGetEvents;

#[derive(Debug, Clone, Serialize)]
pub struct CalendarRangeVariables {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGetEventsData {
    pub calendar_event_s21: CalendarEventsRoot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventsRoot {
    pub get_my_calendar_events: Vec<CalendarEvent>,
}

impl GraphQlOperation for CalendarGetEvents {
    const OPERATION_NAME: &'static str = "calendarGetEvents";
    const QUERY: &'static str = concat!(
        r"query calendarGetEvents($from: DateTime!, $to: DateTime!) {
  calendarEventS21 {
    getMyCalendarEvents(from: $from, to: $to) {
      ...CalendarEvent
      __typename
    }
    __typename
  }
}",
        calendar_event_fragment!()
    );
    type Variables = CalendarRangeVariables;
    type ResponseData = CalendarGetEventsData;
}

/* -------------------------------------------------------------------------- */
/* calendarAddEvent */
/* -------------------------------------------------------------------------- */

/// Publish a new review window; the server answers with the affected events
pub struct CalendarAddEvent;

#[derive(Debug, Clone, Serialize)]
pub struct SlotWindowVariables {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarAddEventData {
    pub student: AddEventRoot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEventRoot {
    pub add_event_to_timetable: Vec<CalendarEvent>,
}

impl GraphQlOperation for CalendarAddEvent {
    const OPERATION_NAME: &'static str = "calendarAddEvent";
    const QUERY: &'static str = concat!(
        r"mutation calendarAddEvent($start: DateTime!, $end: DateTime!) {
  student {
    addEventToTimetable(start: $start, end: $end) {
      ...CalendarEvent
      __typename
    }
    __typename
  }
}",
        calendar_event_fragment!()
    );
    type Variables = SlotWindowVariables;
    type ResponseData = CalendarAddEventData;
}

/* -------------------------------------------------------------------------- */
/* calendarChangeEventSlot */
/* -------------------------------------------------------------------------- */

/// Move an existing slot; the server echoes the parent event
pub struct CalendarChangeEventSlot;

#[derive(Debug, Clone, Serialize)]
pub struct ChangeSlotVariables {
    pub id: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarChangeEventSlotData {
    pub student: ChangeEventSlotRoot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEventSlotRoot {
    pub change_event_slot: CalendarEvent,
}

impl GraphQlOperation for CalendarChangeEventSlot {
    const OPERATION_NAME: &'static str = "calendarChangeEventSlot";
    const QUERY: &'static str = concat!(
        r"mutation calendarChangeEventSlot($id: ID!, $start: DateTime!, $end: DateTime!) {
  student {
    changeEventSlot(eventSlotId: $id, start: $start, end: $end) {
      ...CalendarEvent
      __typename
    }
    __typename
  }
}",
        calendar_event_fragment!()
    );
    type Variables = ChangeSlotVariables;
    type ResponseData = CalendarChangeEventSlotData;
}

/* -------------------------------------------------------------------------- */
/* calendarDeleteEventSlot */
/* -------------------------------------------------------------------------- */

pub struct CalendarDeleteEventSlot;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSlotVariables {
    pub event_slot_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDeleteEventSlotData {
    pub student: DeleteEventSlotRoot,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventSlotRoot {
    pub delete_event_slot: bool,
}

impl GraphQlOperation for CalendarDeleteEventSlot {
    const OPERATION_NAME: &'static str = "calendarDeleteEventSlot";
    const QUERY: &'static str = r"mutation calendarDeleteEventSlot($eventSlotId: ID!) {
  student {
    deleteEventSlot(eventSlotId: $eventSlotId)
    __typename
  }
}";
    type Variables = DeleteSlotVariables;
    type ResponseData = CalendarDeleteEventSlotData;
}
