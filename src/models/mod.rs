pub mod booking;
pub mod guest;
