//! Integration test utilities for the guestbook server
//!
//! This crate provides helpers for running end-to-end tests against
//! the web application.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
