//! WebSocket Live Updates
//!
//! The browser keeps one WebSocket open per page view. Over it the client
//! reports form events and the server answers with re-rendered markup.
//!
//! ## Architecture
//!
//! - **SessionHub**: Counts active sessions and enforces the limit
//! - **Handler**: Mounts a diary page per connection and drives it
//! - **Messages**: Client and server message formats
//!
//! ## Protocol
//!
//! ```text
//! client                               server
//!   │ ── (connect /ws) ───────────────▶ │ mount page (loads diary file)
//!   │ ◀─ {"type":"connected",...} ───── │
//!   │ ◀─ {"type":"render","html":...} ─ │
//!   │ ── {"type":"change","value":..} ▶ │ edit
//!   │ ◀─ {"type":"render",...} ──────── │
//!   │ ── {"type":"submit"} ───────────▶ │ append entry
//!   │ ◀─ {"type":"render",...} ──────── │ (render saves the file)
//! ```

mod handler;
mod messages;
mod session;

pub use handler::{handle_client_message, websocket_handler};
pub use messages::{ClientMessage, ServerMessage};
pub use session::{HubConfig, HubError, SessionHub, SessionId};
