use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;

use crate::actions::booking;
use crate::auth::session::get_guest_id;
use crate::cache::RenderCache;
use crate::errors::AppError;
use crate::handlers::respond;
use crate::models::booking::BookingData;

#[derive(Deserialize)]
pub struct UpdateBookingForm {
    #[serde(rename = "bookingId")]
    pub booking_id: i64,
    #[serde(rename = "numGuests")]
    pub num_guests: i32,
    #[serde(default)]
    pub observations: String,
}

#[derive(Deserialize)]
pub struct DeleteBookingForm {
    #[serde(rename = "bookingId")]
    pub booking_id: i64,
}

/// The cabin page posts its trusted reservation context (cabin, dates,
/// price) alongside the guest-supplied fields.
#[derive(Deserialize)]
pub struct ReserveForm {
    #[serde(rename = "cabinId")]
    pub cabin_id: i64,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "numNights")]
    pub num_nights: i32,
    #[serde(rename = "cabinPrice")]
    pub cabin_price: f64,
    #[serde(rename = "numGuests")]
    pub num_guests: i32,
    #[serde(default)]
    pub observations: String,
}

pub async fn update(
    pool: web::Data<PgPool>,
    cache: web::Data<RenderCache>,
    session: Session,
    form: web::Form<UpdateBookingForm>,
) -> Result<HttpResponse, AppError> {
    let viewer = get_guest_id(&session);
    let outcome = booking::update_booking(
        viewer,
        form.booking_id,
        form.num_guests,
        &form.observations,
        pool.get_ref(),
        cache.get_ref(),
    )
    .await?;
    Ok(respond(outcome))
}

pub async fn create(
    pool: web::Data<PgPool>,
    cache: web::Data<RenderCache>,
    session: Session,
    form: web::Form<ReserveForm>,
) -> Result<HttpResponse, AppError> {
    let viewer = get_guest_id(&session);
    let data = BookingData {
        cabin_id: form.cabin_id,
        start_date: form.start_date,
        end_date: form.end_date,
        num_nights: form.num_nights,
        cabin_price: form.cabin_price,
    };
    let outcome = booking::create_booking(
        viewer,
        &data,
        form.num_guests,
        &form.observations,
        pool.get_ref(),
        cache.get_ref(),
    )
    .await?;
    Ok(respond(outcome))
}

pub async fn delete(
    pool: web::Data<PgPool>,
    cache: web::Data<RenderCache>,
    session: Session,
    form: web::Form<DeleteBookingForm>,
) -> Result<HttpResponse, AppError> {
    let viewer = get_guest_id(&session);
    let outcome =
        booking::delete_booking(viewer, form.booking_id, pool.get_ref(), cache.get_ref()).await?;
    Ok(respond(outcome))
}
