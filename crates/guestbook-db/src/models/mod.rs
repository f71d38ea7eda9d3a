//! Database models

mod guest;

pub use guest::GuestModel;
