//! Guestbook page handlers
//!
//! The single page route: GET renders the guest list, POST signs the book.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use guestbook_core::NewGuestEntry;
use serde::Deserialize;
use tracing::{debug, info};

use crate::response::ApiResult;
use crate::state::AppState;
use crate::templates::IndexTemplate;

/// Form payload for signing the guestbook
///
/// Fields default to empty strings so a missing field behaves the same
/// as an empty one instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SignForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// Render the guest list page
///
/// GET /
pub async fn show_entries(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let entries = state.repo().list_all().await?;
    let page = IndexTemplate { entries };
    Ok(Html(page.render()?))
}

/// Sign the guestbook, then redirect back to the page
///
/// POST /
///
/// An entry with an empty or missing name or message is silently skipped;
/// the redirect happens either way.
pub async fn sign_guestbook(
    State(state): State<AppState>,
    Form(form): Form<SignForm>,
) -> ApiResult<Redirect> {
    let entry = NewGuestEntry::new(form.name, form.message);

    if entry.is_valid() {
        state.repo().insert(&entry).await?;
        info!(name = %entry.name, "Guest entry created");
    } else {
        debug!("Skipping guest entry with empty name or message");
    }

    Ok(Redirect::to("/"))
}
