//! Domain entities

mod guest;

pub use guest::{GuestEntry, NewGuestEntry};
