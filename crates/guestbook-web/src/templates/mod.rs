//! Page templates
//!
//! Askama templates rendered by the page handlers. Values are HTML-escaped
//! by the template engine.

use askama::Template;
use guestbook_core::GuestEntry;

/// The guestbook page: submission form plus the entry list, newest first
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub entries: Vec<GuestEntry>,
}
