//! Entry List
//!
//! Every render writes the full entry collection to disk before drawing the
//! cards, so whatever is on screen is also what is in the file.

use maud::{html, Markup};

use super::card::entry_card;
use crate::storage::{Entry, EntryStore, StorageResult};

/// Output of one list render
pub struct ListRender {
    /// Rendered list markup
    pub markup: Markup,
    /// Outcome of persisting the entries during this render
    pub saved: StorageResult<()>,
}

/// Persist `entries` (oldest first) and render them newest first
pub fn render(store: &EntryStore, entries: &[Entry]) -> ListRender {
    let saved = store.save(entries);

    let save_error = match &saved {
        Ok(()) => None,
        Err(e) => {
            tracing::error!(
                path = ?store.path(),
                error = %e,
                entries = entries.len(),
                "Failed to save diary entries"
            );
            Some(e.to_string())
        }
    };

    let markup = html! {
        div id="entry-panel" {
            @if let Some(message) = save_error {
                div class="alert alert-danger" role="alert" {
                    "Entries could not be saved to " (store.file_name()) ": " (message)
                }
            }
            div id="entry-list" style="height: 600px; overflow-y: auto; white-space: pre-wrap" {
                @for entry in entries.iter().rev() {
                    (entry_card(entry))
                }
            }
        }
    };

    ListRender { markup, saved }
}
