//! Request handlers

pub mod guestbook;
pub mod health;
