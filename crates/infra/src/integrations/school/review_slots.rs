//! Implementation of the ReviewSlotProvider port
//!
//! Fetches calendar events through the GraphQL transport and reduces them
//! with the pure projection functions from `s21-core`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use s21_common::context::RequestContext;
use s21_common::time::format_wire_millis;
use s21_core::review::ports::ReviewSlotProvider;
use s21_core::{available_slots, dedup_bookings, find_slot, project_events, validate_slot_window};
use s21_domain::{CalendarEvent, Result, ReviewBooking, ReviewSlot};
use tracing::{info, instrument, warn};

use crate::api::operations::{
    CalendarAddEvent, CalendarChangeEventSlot, CalendarDeleteEventSlot, CalendarGetEvents,
    CalendarRangeVariables, ChangeSlotVariables, DeleteSlotVariables, SlotWindowVariables,
};
use crate::api::GraphQlClient;

/// Review-slot scheduling backed by the calendar operations
///
/// Cheap to clone; clones share the transport and its token state.
#[derive(Clone)]
pub struct ReviewSlotProjector {
    client: GraphQlClient,
}

impl ReviewSlotProjector {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    /// Raw calendar events in `[from, to]`, before any projection
    #[instrument(skip(self, ctx))]
    pub async fn calendar_events(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>> {
        let variables =
            CalendarRangeVariables { from: format_wire_millis(&from), to: format_wire_millis(&to) };

        let data = self.client.execute::<CalendarGetEvents>(ctx, &variables).await?;
        Ok(data.calendar_event_s21.get_my_calendar_events)
    }
}

#[async_trait]
impl ReviewSlotProvider for ReviewSlotProjector {
    async fn get_review_slots(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<(Vec<ReviewSlot>, Vec<ReviewBooking>)> {
        let events = self.calendar_events(ctx, from, to).await?;
        let schedule = project_events(&events)?;
        Ok((schedule.slots, schedule.bookings))
    }

    async fn get_available_review_slots(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReviewSlot>> {
        let (slots, _) = self.get_review_slots(ctx, from, to).await?;
        Ok(available_slots(slots))
    }

    async fn get_booked_reviews(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReviewBooking>> {
        let (_, bookings) = self.get_review_slots(ctx, from, to).await?;
        Ok(dedup_bookings(bookings))
    }

    #[instrument(skip(self, ctx))]
    async fn add_review_slot(
        &self,
        ctx: &RequestContext,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReviewSlot>> {
        validate_slot_window(&start, &end)?;

        let variables = SlotWindowVariables {
            start: format_wire_millis(&start),
            end: format_wire_millis(&end),
        };
        let data = self.client.execute::<CalendarAddEvent>(ctx, &variables).await?;

        let slots = project_events(&data.student.add_event_to_timetable)?.slots;
        info!(slots = slots.len(), "Review slot window published");
        Ok(slots)
    }

    #[instrument(skip(self, ctx))]
    async fn update_review_slot(
        &self,
        ctx: &RequestContext,
        slot_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ReviewSlot> {
        validate_slot_window(&start, &end)?;

        let variables = ChangeSlotVariables {
            id: slot_id.to_string(),
            start: format_wire_millis(&start),
            end: format_wire_millis(&end),
        };
        let data = self.client.execute::<CalendarChangeEventSlot>(ctx, &variables).await?;

        find_slot(&data.student.change_event_slot, slot_id)
    }

    #[instrument(skip(self, ctx))]
    async fn remove_review_slot(&self, ctx: &RequestContext, slot_id: &str) -> Result<()> {
        let variables = DeleteSlotVariables { event_slot_id: slot_id.to_string() };
        let data = self.client.execute::<CalendarDeleteEventSlot>(ctx, &variables).await?;

        if data.student.delete_event_slot {
            info!(slot_id, "Review slot removed");
        } else {
            warn!(slot_id, "Delete acknowledged with a false payload");
        }
        Ok(())
    }
}
