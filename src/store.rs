//! Persistence seams for the action handlers. The real implementations live
//! on [`sqlx::PgPool`] in `models/*/queries.rs`; tests substitute in-memory
//! doubles.

use crate::models::booking::{BookingPatch, NewBooking};
use crate::models::guest::ProfileUpdate;

#[allow(async_fn_in_trait)]
pub trait GuestStore {
    /// Persist the mutable profile fields of one guest.
    async fn update_profile(
        &self,
        guest_id: i64,
        update: &ProfileUpdate,
    ) -> Result<(), sqlx::Error>;
}

#[allow(async_fn_in_trait)]
pub trait BookingStore {
    /// Ownership probe: does `booking_id` belong to `guest_id`? Checked
    /// fresh immediately before every mutation or deletion.
    async fn owns(&self, guest_id: i64, booking_id: i64) -> Result<bool, sqlx::Error>;

    /// Insert exactly one booking, returning its id.
    async fn create(&self, booking: &NewBooking) -> Result<i64, sqlx::Error>;

    /// Update the guest-mutable fields of one booking.
    async fn update(&self, booking_id: i64, patch: &BookingPatch) -> Result<(), sqlx::Error>;

    /// Delete one booking by id.
    async fn delete(&self, booking_id: i64) -> Result<(), sqlx::Error>;
}
