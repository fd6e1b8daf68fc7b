use chrono::NaiveDate;

/// Every booking starts here; confirmation and payment happen at check-in.
pub const STATUS_UNCONFIRMED: &str = "unconfirmed";

/// Trusted reservation context assembled by the cabin page from its own
/// data (cabin, dates, price). Not re-validated by the create action.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingData {
    pub cabin_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub cabin_price: f64,
}

/// Full insert payload for a new booking: the trusted page data, the
/// requesting guest, the guest-supplied fields, and the server defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub guest_id: i64,
    pub cabin_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: f64,
    pub extras_price: f64,
    pub total_price: f64,
    pub status: String,
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub observations: String,
}

/// The only two fields a guest may change on an existing booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPatch {
    pub num_guests: i32,
    pub observations: String,
}
