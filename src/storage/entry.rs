//! Diary entry type
//!
//! An entry is one row of the diary table: the moment it was written and
//! the free text the user typed.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Column header of the persisted table, in column order
pub const COLUMN_HEADER: [&str; 2] = ["Date", "Description"];

/// `strftime` format of [`Entry::date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Local time the entry was submitted, formatted with [`DATE_FORMAT`]
    #[serde(rename = "Date")]
    pub date: String,
    /// Free text, may be empty
    #[serde(rename = "Description")]
    pub description: String,
}

impl Entry {
    /// Create an entry with an explicit date string
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
        }
    }

    /// Create an entry stamped with the current local time
    pub fn now(description: impl Into<String>) -> Self {
        Self::new(current_timestamp(), description)
    }
}

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`
pub fn current_timestamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
