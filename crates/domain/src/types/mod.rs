//! Data types used throughout the client

pub mod calendar;
pub mod review;

pub use calendar::{
    BookedSlot, BookingTask, BookingUser, CalendarBooking, CalendarEvent, EventSlot, SchoolRef,
};
pub use review::{ReviewBooking, ReviewSchedule, ReviewSlot, SlotType};
