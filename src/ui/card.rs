//! Entry Card
//!
//! Static block showing one diary entry.

use maud::{html, Markup};

use crate::storage::Entry;

/// Render one entry with its date as a subheading and the description as body text
pub fn entry_card(entry: &Entry) -> Markup {
    html! {
        div {
            div class="card text-dark bg-light border-secondary mb-2" {
                div class="card-body text-secondary" {
                    div class="card-title text-secondary" {
                        h6 { (entry.date) }
                    }
                    div class="card-text text-secondary" {
                        span { (entry.description) }
                    }
                }
            }
        }
    }
}
