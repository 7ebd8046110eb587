use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use s21_common::context::RequestContext;
use s21_core::review::ports::ReviewSlotProvider;
use s21_core::{available_slots, dedup_bookings, find_slot, project_events, validate_slot_window};
use s21_domain::{CalendarEvent, ClientError, Result, ReviewBooking, ReviewSlot};

/// In-memory `ReviewSlotProvider` backed by a fixed list of calendar events.
///
/// Runs the real projection functions over the stored events and records
/// every slot id passed to `remove_review_slot`.
#[derive(Default, Clone)]
pub struct InMemoryReviewSlots {
    events: Arc<Mutex<Vec<CalendarEvent>>>,
    removed: Arc<Mutex<Vec<String>>>,
}

impl InMemoryReviewSlots {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events: Arc::new(Mutex::new(events)), removed: Arc::default() }
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CalendarEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewSlotProvider for InMemoryReviewSlots {
    async fn get_review_slots(
        &self,
        _ctx: &RequestContext,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<(Vec<ReviewSlot>, Vec<ReviewBooking>)> {
        let schedule = project_events(&self.events())?;
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

    async fn add_review_slot(
        &self,
        _ctx: &RequestContext,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReviewSlot>> {
        validate_slot_window(&start, &end)?;
        Ok(project_events(&self.events())?.slots)
    }

    async fn update_review_slot(
        &self,
        _ctx: &RequestContext,
        slot_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ReviewSlot> {
        validate_slot_window(&start, &end)?;
        let events = self.events();
        let echoed = events
            .first()
            .ok_or_else(|| ClientError::NotFound("no events stored".to_string()))?;
        find_slot(echoed, slot_id)
    }

    async fn remove_review_slot(&self, _ctx: &RequestContext, slot_id: &str) -> Result<()> {
        self.removed.lock().unwrap().push(slot_id.to_string());
        Ok(())
    }
}
