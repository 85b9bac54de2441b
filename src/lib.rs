//! # Diary
//!
//! A single-user journaling web form. Each submitted entry is stamped with
//! the current time, appended to a CSV file, and shown back as a list of
//! cards, newest first.
//!
//! ## Modules
//!
//! - [`storage`]: CSV-backed entry store
//! - [`ui`]: Server-side component tree (page, list, card)
//! - [`api`]: HTTP host with Axum
//! - [`websocket`]: Live-update channel between browser and page session
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use diary::storage::EntryStore;
//! use diary::ui::DiaryPage;
//!
//! let mut page = DiaryPage::mount(EntryStore::new("diary.csv"));
//! page.edit("Finally fixed the bike");
//! page.submit();
//!
//! // Rendering writes the entries back to diary.csv
//! let html = page.render().into_string();
//! println!("{}", html);
//! ```

pub mod api;
pub mod config;
pub mod storage;
pub mod ui;
pub mod websocket;

// Re-export top-level types for convenience
pub use storage::{Entry, EntryStore, StorageError, StorageResult};

pub use ui::{DiaryPage, PageState};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{ClientMessage, HubConfig, HubError, ServerMessage, SessionHub};

pub use config::{ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig};
