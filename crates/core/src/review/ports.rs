//! Review slot provider port
//!
//! Implemented by the infrastructure projector; callers depend on this trait
//! so they can be tested against an in-memory provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use s21_common::context::RequestContext;
use s21_domain::{Result, ReviewBooking, ReviewSlot};

/// Trait for review-slot scheduling operations
#[async_trait]
pub trait ReviewSlotProvider: Send + Sync {
    /// Slots and bookings from review events in `[from, to]`
    async fn get_review_slots(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<(Vec<ReviewSlot>, Vec<ReviewBooking>)>;

    /// Only the free-time slots from [`get_review_slots`](Self::get_review_slots)
    async fn get_available_review_slots(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReviewSlot>>;

    /// Bookings deduplicated by id, first occurrence kept
    async fn get_booked_reviews(
        &self,
        ctx: &RequestContext,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ReviewBooking>>;

    /// Publish a new slot window; returns the slots echoed by the server
    async fn add_review_slot(
        &self,
        ctx: &RequestContext,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReviewSlot>>;

    /// Move an existing slot; fails with `NotFound` if the echo lacks it
    async fn update_review_slot(
        &self,
        ctx: &RequestContext,
        slot_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ReviewSlot>;

    /// Delete a slot
    async fn remove_review_slot(&self, ctx: &RequestContext, slot_id: &str) -> Result<()>;

    /// Cancel a review by deleting its slot
    async fn cancel_review(&self, ctx: &RequestContext, slot_id: &str) -> Result<()> {
        self.remove_review_slot(ctx, slot_id).await
    }
}
