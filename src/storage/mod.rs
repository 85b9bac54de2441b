//! Diary Storage
//!
//! Flat-file persistence for the diary table:
//!
//! - **entry**: The [`Entry`] row type and timestamp format
//! - **store**: [`EntryStore`], the CSV load/save adapter
//! - **error**: Error types
//!
//! # File format
//!
//! ```text
//! Date,Description
//! 2024-01-01 09:00:00,First entry text
//! 2024-01-02 10:15:30,Second entry
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use diary::storage::{Entry, EntryStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EntryStore::new("diary.csv");
//!
//!     // Creates the file with only a header if it does not exist yet
//!     let mut entries = store.load()?;
//!
//!     entries.push(Entry::now("Went for a walk"));
//!     store.save(&entries)?;
//!
//!     Ok(())
//! }
//! ```

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{current_timestamp, Entry, COLUMN_HEADER, DATE_FORMAT};
pub use error::{StorageError, StorageResult};
pub use store::EntryStore;
