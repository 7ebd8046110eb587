//! Review slot and booking models projected from calendar events

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{BOOKED_TIME_SLOT_TYPE, FREE_TIME_SLOT_TYPE};

/// Slot type discriminator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotType {
    /// Open slot that other students can book
    FreeTime,
    /// Slot already taken by a booking
    BookedTime,
    /// Any discriminator this client does not model
    Other(String),
}

impl SlotType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FreeTime => FREE_TIME_SLOT_TYPE,
            Self::BookedTime => BOOKED_TIME_SLOT_TYPE,
            Self::Other(raw) => raw,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Self::FreeTime)
    }
}

impl From<String> for SlotType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            FREE_TIME_SLOT_TYPE => Self::FreeTime,
            BOOKED_TIME_SLOT_TYPE => Self::BookedTime,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for SlotType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SlotType> for String {
    fn from(slot_type: SlotType) -> Self {
        slot_type.as_str().to_string()
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review slot from the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSlot {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    /// Raw slots never carry online status, so this is always `false` when
    /// projected from calendar events.
    pub is_online: bool,
    pub school: String,
}

/// Booked review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBooking {
    pub id: String,
    pub slot_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub project_name: String,
    pub verifier_login: String,
    pub is_online: bool,
    pub status: String,
}

/// Slots and bookings derived from one calendar window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSchedule {
    pub slots: Vec<ReviewSlot>,
    pub bookings: Vec<ReviewBooking>,
}
