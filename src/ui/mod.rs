//! Diary UI
//!
//! Server-side component tree, leaves first:
//!
//! - **card**: One entry as a Bootstrap card
//! - **list**: Persists the entries, then renders cards newest first
//! - **page**: [`DiaryPage`], the stateful root holding entries and form input
//! - **document**: Full HTML document and client script around a page body

pub mod card;
pub mod document;
pub mod list;
pub mod page;

pub use card::entry_card;
pub use document::document;
pub use list::ListRender;
pub use page::{DiaryPage, PageState, RenderCycle};
