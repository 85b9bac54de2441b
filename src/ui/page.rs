//! Diary Page
//!
//! The stateful root of the UI. A page is mounted once per session, then
//! driven by form events:
//!
//! ```text
//! mount ──load ok──▶ Ready { entries, pending_description }
//!   │                  │  edit(value)  → pending_description = value
//!   │                  │  submit()     → entries = entries ++ (now, pending_description)
//!   │                  │  reset()      → pending_description = ""
//!   └──load error──▶ Failed { message }   (terminal, events ignored)
//! ```
//!
//! Every transition is followed by a render, and rendering persists the
//! entry collection through the [`list`](super::list) component.

use maud::{html, Markup};
use std::iter;
use std::sync::Arc;

use super::list;
use crate::storage::{Entry, EntryStore, StorageResult};

/// State held by a mounted page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Entries loaded, form is interactive
    Ready {
        /// Entry collection, oldest first. Replaced, never mutated, on submit.
        entries: Arc<[Entry]>,
        /// Current text of the description field
        pending_description: String,
    },
    /// Loading the diary file failed; the page only shows the error
    Failed {
        /// Description of the load failure
        message: String,
    },
}

/// Output of one render cycle
pub struct RenderCycle {
    /// Rendered page body
    pub markup: Markup,
    /// Outcome of the save performed while rendering. Always `Ok` for a failed page.
    pub saved: StorageResult<()>,
}

/// One session's diary page
#[derive(Debug)]
pub struct DiaryPage {
    store: EntryStore,
    state: PageState,
}

impl DiaryPage {
    /// Mount a page, loading the entry collection from `store`
    pub fn mount(store: EntryStore) -> Self {
        let state = match store.load() {
            Ok(entries) => PageState::Ready {
                entries: entries.into(),
                pending_description: String::new(),
            },
            Err(e) => {
                tracing::warn!(path = ?store.path(), error = %e, "Failed to open diary file");
                PageState::Failed {
                    message: e.to_string(),
                }
            }
        };

        Self { store, state }
    }

    /// Current state
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Storage handle backing this page
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// True when the page is in the terminal error state
    pub fn is_failed(&self) -> bool {
        matches!(self.state, PageState::Failed { .. })
    }

    /// Entry collection, oldest first. Empty for a failed page.
    pub fn entries(&self) -> &[Entry] {
        match &self.state {
            PageState::Ready { entries, .. } => &entries[..],
            PageState::Failed { .. } => &[],
        }
    }

    /// Shared handle to the current entry collection. Later submits leave it untouched.
    pub fn snapshot(&self) -> Arc<[Entry]> {
        match &self.state {
            PageState::Ready { entries, .. } => Arc::clone(entries),
            PageState::Failed { .. } => Arc::from(Vec::new()),
        }
    }

    /// Current description text, `None` for a failed page
    pub fn pending_description(&self) -> Option<&str> {
        match &self.state {
            PageState::Ready {
                pending_description,
                ..
            } => Some(pending_description.as_str()),
            PageState::Failed { .. } => None,
        }
    }

    /// Description field changed
    pub fn edit(&mut self, value: impl Into<String>) {
        if let PageState::Ready {
            pending_description,
            ..
        } = &mut self.state
        {
            *pending_description = value.into();
        }
    }

    /// Form submitted: replace the collection with one that ends in a new
    /// entry stamped with the current time.
    ///
    /// The pending description is kept; only [`reset`](Self::reset) clears it.
    pub fn submit(&mut self) {
        if let PageState::Ready {
            entries,
            pending_description,
        } = &mut self.state
        {
            let entry = Entry::now(pending_description.clone());
            tracing::debug!(date = %entry.date, "Appending diary entry");
            *entries = entries.iter().cloned().chain(iter::once(entry)).collect();
        }
    }

    /// Form reset: the field is cleared in the browser, mirror that here
    pub fn reset(&mut self) {
        self.edit(String::new());
    }

    /// Render the page body. Persists the entries as a side effect.
    pub fn render(&self) -> Markup {
        self.render_cycle().markup
    }

    /// Render the page body and report whether persisting succeeded
    pub fn render_cycle(&self) -> RenderCycle {
        match &self.state {
            PageState::Failed { message } => RenderCycle {
                markup: html! {
                    h4 style="color: red" {
                        "There is error " (message) " in opening the "
                        (self.store.file_name()) " file."
                    }
                },
                saved: Ok(()),
            },
            PageState::Ready { entries, .. } => {
                let list = list::render(&self.store, entries);
                let markup = html! {
                    div {
                        h2 { "My Diary" }
                        form id="diary-form" method="post" action="/" {
                            div class="form-group" {
                                label for="description" class="text-primary fs-5" {
                                    "Description"
                                }
                                textarea
                                    class="form-control border-primary"
                                    id="description"
                                    name="description"
                                    rows="4" {}
                            }
                            p {}
                            input class="btn btn-success" type="submit" value="Save";
                            input class="btn btn-danger mx-1" type="reset" value="Clear";
                        }
                        p {}
                        (list.markup)
                    }
                };
                RenderCycle {
                    markup,
                    saved: list.saved,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn mount_in(dir: &tempfile::TempDir) -> DiaryPage {
        DiaryPage::mount(EntryStore::new(dir.path().join("diary.csv")))
    }

    #[test]
    fn test_mount_missing_file_is_ready_and_empty() {
        let dir = tempdir().unwrap();
        let page = mount_in(&dir);

        assert!(!page.is_failed());
        assert!(page.entries().is_empty());
        assert_eq!(page.pending_description(), Some(""));
        assert!(dir.path().join("diary.csv").exists());
    }

    #[test]
    fn test_submits_append_in_order() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        for text in ["one", "two", "three"] {
            page.edit(text);
            page.submit();
            page.render();
        }

        let entries = page.entries();
        assert_eq!(entries.len(), 3);
        let descriptions: Vec<_> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["one", "two", "three"]);
        assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_render_persists_entries() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.edit("first");
        page.submit();
        page.edit("second, with comma");
        page.submit();
        assert!(page.render_cycle().saved.is_ok());

        let on_disk = page.store().load().unwrap();
        assert_eq!(on_disk, page.entries());
    }

    #[test]
    fn test_submit_replaces_collection() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.edit("first");
        page.submit();
        let before = page.snapshot();

        page.edit("second");
        page.submit();

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].description, "first");
        assert_eq!(page.entries().len(), 2);
        assert!(!Arc::ptr_eq(&before, &page.snapshot()));
    }

    #[test]
    fn test_empty_description_is_accepted() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.submit();

        assert_eq!(page.entries().len(), 1);
        assert_eq!(page.entries()[0].description, "");
    }

    #[test]
    fn test_submit_keeps_pending_description() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.edit("still here");
        page.submit();
        assert_eq!(page.pending_description(), Some("still here"));

        page.submit();
        assert_eq!(page.entries().len(), 2);
        assert_eq!(page.entries()[1].description, "still here");
    }

    #[test]
    fn test_reset_clears_pending_description() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.edit("draft");
        page.reset();
        page.submit();

        assert_eq!(page.pending_description(), Some(""));
        assert_eq!(page.entries()[0].description, "");
    }

    #[test]
    fn test_edit_does_not_touch_entries() {
        let dir = tempdir().unwrap();
        let mut page = mount_in(&dir);

        page.edit("typing");
        assert!(page.entries().is_empty());
    }

    #[test]
    fn test_render_shows_form_and_newest_first() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("diary.csv"),
            "Date,Description\n2024-01-01 09:00:00,older\n2024-01-02 09:00:00,newer\n",
        )
        .unwrap();
        let page = mount_in(&dir);

        let html = page.render().into_string();
        assert!(html.contains("<h2>My Diary</h2>"));
        assert!(html.contains("id=\"diary-form\""));
        assert!(html.contains("value=\"Save\""));
        assert!(html.contains("value=\"Clear\""));
        assert!(html.find("newer").unwrap() < html.find("older").unwrap());
    }

    #[test]
    fn test_malformed_file_renders_error_instead_of_form() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("diary.csv"),
            "Date,Description\n2024-01-01 09:00:00,a,b\n",
        )
        .unwrap();
        let mut page = mount_in(&dir);

        assert!(page.is_failed());
        let PageState::Failed { message } = page.state().clone() else {
            panic!("Expected Failed");
        };
        assert!(!message.is_empty());

        let html = page.render().into_string();
        assert!(html.contains(&message));
        assert!(html.contains("in opening the diary.csv file."));
        assert!(!html.contains("<form"));

        // Events are ignored and the file is left alone
        page.edit("x");
        page.submit();
        assert!(page.entries().is_empty());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("diary.csv")).unwrap(),
            "Date,Description\n2024-01-01 09:00:00,a,b\n"
        );
    }
}
