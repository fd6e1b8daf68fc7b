use sqlx::PgPool;

use crate::models::booking::{BookingPatch, NewBooking};
use crate::store::BookingStore;

impl BookingStore for PgPool {
    async fn owns(&self, guest_id: i64, booking_id: i64) -> Result<bool, sqlx::Error> {
        let (owned,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bookings WHERE id = $1 AND guest_id = $2)",
        )
        .bind(booking_id)
        .bind(guest_id)
        .fetch_one(self)
        .await?;
        Ok(owned)
    }

    async fn create(&self, booking: &NewBooking) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO bookings
                 (guest_id, cabin_id, start_date, end_date, num_nights, num_guests,
                  cabin_price, extras_price, total_price, status, has_breakfast,
                  is_paid, observations)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING id",
        )
        .bind(booking.guest_id)
        .bind(booking.cabin_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.num_nights)
        .bind(booking.num_guests)
        .bind(booking.cabin_price)
        .bind(booking.extras_price)
        .bind(booking.total_price)
        .bind(&booking.status)
        .bind(booking.has_breakfast)
        .bind(booking.is_paid)
        .bind(&booking.observations)
        .fetch_one(self)
        .await?;
        Ok(id)
    }

    async fn update(&self, booking_id: i64, patch: &BookingPatch) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET num_guests = $1, observations = $2 WHERE id = $3",
        )
        .bind(patch.num_guests)
        .bind(&patch.observations)
        .bind(booking_id)
        .execute(self)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }

    async fn delete(&self, booking_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking_id)
            .execute(self)
            .await?;
        Ok(())
    }
}
