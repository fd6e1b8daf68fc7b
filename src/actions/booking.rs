use crate::actions::Outcome;
use crate::cache::PageCache;
use crate::errors::AppError;
use crate::models::booking::{BookingData, BookingPatch, NewBooking, STATUS_UNCONFIRMED};
use crate::store::BookingStore;
use crate::validate;

/// Update the guest-mutable fields of one of the viewer's bookings, then
/// send the browser back to the reservations list.
pub async fn update_booking<S, C>(
    viewer: Option<i64>,
    booking_id: i64,
    num_guests: i32,
    observations: &str,
    store: &S,
    cache: &C,
) -> Result<Outcome, AppError>
where
    S: BookingStore,
    C: PageCache,
{
    let guest_id = viewer.ok_or_else(|| AppError::unauthenticated("update a reservation"))?;

    if !store.owns(guest_id, booking_id).await? {
        return Err(AppError::Forbidden(
            "You can only update your own reservations",
        ));
    }

    let patch = BookingPatch {
        num_guests,
        observations: validate::clip_observations(observations),
    };
    if let Err(e) = store.update(booking_id, &patch).await {
        log::error!("booking {booking_id} update failed: {e}");
        return Err(AppError::Persistence("Booking could not be updated"));
    }

    cache.invalidate(&format!("/account/reservations/edit/{booking_id}"));
    cache.invalidate("/account/reservations");
    Ok(Outcome::Redirect("/account/reservations".to_string()))
}

/// Insert a new booking for the viewer from the page's trusted reservation
/// context plus the guest-supplied fields.
pub async fn create_booking<S, C>(
    viewer: Option<i64>,
    data: &BookingData,
    num_guests: i32,
    observations: &str,
    store: &S,
    cache: &C,
) -> Result<Outcome, AppError>
where
    S: BookingStore,
    C: PageCache,
{
    let guest_id = viewer.ok_or_else(|| AppError::unauthenticated("create a reservation"))?;

    let booking = NewBooking {
        guest_id,
        cabin_id: data.cabin_id,
        start_date: data.start_date,
        end_date: data.end_date,
        num_nights: data.num_nights,
        num_guests,
        cabin_price: data.cabin_price,
        extras_price: 0.0,
        total_price: data.cabin_price,
        status: STATUS_UNCONFIRMED.to_string(),
        has_breakfast: false,
        is_paid: false,
        observations: validate::clip_observations(observations),
    };
    if let Err(e) = store.create(&booking).await {
        log::error!("booking create for cabin {} failed: {e}", data.cabin_id);
        return Err(AppError::Persistence("Booking could not be created"));
    }

    cache.invalidate(&format!("/cabins/{}", data.cabin_id));
    Ok(Outcome::Redirect("/cabins/thankyou".to_string()))
}

/// Delete one of the viewer's bookings. The caller stays on the current page.
pub async fn delete_booking<S, C>(
    viewer: Option<i64>,
    booking_id: i64,
    store: &S,
    cache: &C,
) -> Result<Outcome, AppError>
where
    S: BookingStore,
    C: PageCache,
{
    let guest_id = viewer.ok_or_else(|| AppError::unauthenticated("delete a reservation"))?;

    if !store.owns(guest_id, booking_id).await? {
        return Err(AppError::Forbidden(
            "You can only delete your own reservations",
        ));
    }

    if let Err(e) = store.delete(booking_id).await {
        log::error!("booking {booking_id} delete failed: {e}");
        return Err(AppError::Persistence("Booking could not be deleted"));
    }

    cache.invalidate("/account/reservations");
    Ok(Outcome::Stay)
}
