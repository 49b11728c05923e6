//! Review, booking and cancellation against the shared inventory.

mod box_office;
mod error;
mod types;

pub use box_office::BoxOffice;
pub use error::BookingError;
pub use types::{
    BookingReceipt, Cancellation, Quote, BOOKED_MESSAGE, CANCELLED_MESSAGE, REVIEW_MESSAGE,
};
