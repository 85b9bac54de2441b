//! Page Routes
//!
//! The diary is served from the application root.
//!
//! - GET / - Render the diary page
//! - POST / - Plain form submission, used when the live channel is unavailable

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::ui::{document, DiaryPage};

/// Form body posted by the diary form
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub description: String,
}

/// GET /
///
/// Mount a fresh page and serve it as a full document.
pub async fn show_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = DiaryPage::mount(state.store.clone());
    Html(document(page.render()).into_string())
}

/// POST /
///
/// Append one entry and redirect back to the page.
pub async fn submit_entry(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EntryForm>,
) -> ApiResult<Response> {
    let mut page = DiaryPage::mount(state.store.clone());
    if page.is_failed() {
        return Ok(Html(document(page.render()).into_string()).into_response());
    }

    page.edit(form.description);
    page.submit();
    page.render_cycle().saved?;

    tracing::info!(entries = page.entries().len(), "Entry submitted via form post");
    Ok(Redirect::to("/").into_response())
}
