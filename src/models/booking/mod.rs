pub mod queries;
pub mod types;

pub use types::{BookingData, BookingPatch, NewBooking, STATUS_UNCONFIRMED};
