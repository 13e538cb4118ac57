pub mod booking;

pub use booking::BookingView;
