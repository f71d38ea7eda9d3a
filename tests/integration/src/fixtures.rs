//! Test fixtures for integration tests

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique fixture names
static FIXTURE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Form payload for signing the guestbook
#[derive(Debug, Clone, Serialize)]
pub struct SignForm {
    pub name: String,
    pub message: String,
}

impl SignForm {
    /// A complete form with unique field values
    pub fn unique() -> Self {
        let n = FIXTURE_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self {
            name: format!("it_guest_{n}"),
            message: format!("integration test message {n}"),
        }
    }

    /// A form with an empty name
    pub fn empty_name() -> Self {
        let mut form = Self::unique();
        form.name = String::new();
        form
    }

    /// A form with an empty message
    pub fn empty_message() -> Self {
        let mut form = Self::unique();
        form.message = String::new();
        form
    }
}
