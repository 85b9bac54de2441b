//! WebSocket Handler
//!
//! Each connection is one diary session: the page is mounted when the
//! socket opens, then every client event is applied in arrival order and
//! answered with a fresh render.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::ui::DiaryPage;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Run one diary session over an established WebSocket
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let session_id = match state.sessions.register().await {
        Ok(id) => id,
        Err(e) => {
            let active = state.sessions.session_count().await;
            tracing::warn!(error = %e, active, "Rejecting diary session");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            let _ = send_message(&mut sender, &error_msg).await;
            let _ = sender.send(Message::Close(None)).await;
            return;
        }
    };

    let mut page = DiaryPage::mount(state.store.clone());

    let greeting = [
        ServerMessage::Connected {
            session_id: session_id.clone(),
        },
        render_message(&page),
    ];
    for message in &greeting {
        if send_message(&mut sender, message).await.is_err() {
            tracing::debug!(session_id = %session_id, "Client went away during handshake");
            state.sessions.unregister(&session_id).await;
            return;
        }
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(session_id = %session_id, error = %e, "WebSocket receive error");
                break;
            }
        };

        let reply = match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => handle_client_message(&mut page, client_msg),
                Err(e) => {
                    tracing::debug!(
                        session_id = %session_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    }
                }
            },
            Message::Binary(_) => ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            },
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => {
                tracing::debug!(session_id = %session_id, "Client requested close");
                break;
            }
        };

        if send_message(&mut sender, &reply).await.is_err() {
            tracing::debug!(session_id = %session_id, "WebSocket send failed, closing session");
            break;
        }
    }

    state.sessions.unregister(&session_id).await;
}

/// Apply a client event to the page and produce the reply
pub fn handle_client_message(page: &mut DiaryPage, message: ClientMessage) -> ServerMessage {
    match message {
        ClientMessage::Change { value } => page.edit(value),
        ClientMessage::Submit => page.submit(),
        ClientMessage::Reset => page.reset(),
        ClientMessage::Ping => return ServerMessage::Pong,
    }
    render_message(page)
}

fn render_message(page: &DiaryPage) -> ServerMessage {
    ServerMessage::Render {
        html: page.render().into_string(),
    }
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerMessage,
) -> Result<(), axum::Error> {
    let text = serde_json::to_string(message).map_err(axum::Error::new)?;
    sender.send(Message::Text(text)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_router, AppState};
    use crate::config::ApiConfig;
    use crate::storage::EntryStore;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio_tungstenite::{connect_async, tungstenite, MaybeTlsStream, WebSocketStream};

    type ClientSocket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

    async fn spawn_server(max_sessions: usize) -> (SocketAddr, EntryStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("diary.csv"));
        let config = ApiConfig {
            max_sessions,
            ..ApiConfig::default()
        };
        let router = build_router(AppState::new(store.clone(), &config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (addr, store, dir)
    }

    async fn connect(addr: SocketAddr) -> ClientSocket {
        let (socket, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
        socket
    }

    /// Next text frame parsed as JSON, or `None` once the server has closed
    async fn next_json(socket: &mut ClientSocket) -> Option<serde_json::Value> {
        let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .expect("timed out waiting for a frame");
        match frame {
            Some(Ok(tungstenite::Message::Text(text))) => {
                Some(serde_json::from_str(&text).unwrap())
            }
            Some(Ok(tungstenite::Message::Close(_))) | Some(Err(_)) | None => None,
            Some(Ok(other)) => panic!("Unexpected frame: {:?}", other),
        }
    }

    async fn send_json(socket: &mut ClientSocket, json: &str) {
        socket
            .send(tungstenite::Message::Text(json.to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_session_over_limit_gets_error_then_close() {
        let (addr, _store, _dir) = spawn_server(0).await;
        let mut socket = connect(addr).await;

        let first = next_json(&mut socket).await.unwrap();
        assert_eq!(first["type"], "error");
        assert!(first["message"]
            .as_str()
            .unwrap()
            .contains("Too many sessions"));

        assert!(next_json(&mut socket).await.is_none());
    }

    #[tokio::test]
    async fn test_session_connects_renders_and_submits() {
        let (addr, store, _dir) = spawn_server(4).await;
        let mut socket = connect(addr).await;

        let connected = next_json(&mut socket).await.unwrap();
        assert_eq!(connected["type"], "connected");
        assert!(!connected["session_id"].as_str().unwrap().is_empty());

        let render = next_json(&mut socket).await.unwrap();
        assert_eq!(render["type"], "render");
        assert!(render["html"].as_str().unwrap().contains("<h2>My Diary</h2>"));

        send_json(&mut socket, r#"{"type":"change","value":"Over the wire"}"#).await;
        assert_eq!(next_json(&mut socket).await.unwrap()["type"], "render");

        send_json(&mut socket, r#"{"type":"submit"}"#).await;
        let render = next_json(&mut socket).await.unwrap();
        assert!(render["html"]
            .as_str()
            .unwrap()
            .contains("<span>Over the wire</span>"));
        assert_eq!(store.load().unwrap()[0].description, "Over the wire");

        send_json(&mut socket, "not json").await;
        assert_eq!(next_json(&mut socket).await.unwrap()["type"], "error");
    }

    fn rendered(message: ServerMessage) -> String {
        match message {
            ServerMessage::Render { html } => html,
            other => panic!("Expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_change_then_submit_renders_new_entry() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("diary.csv"));
        let mut page = DiaryPage::mount(store.clone());

        let html = rendered(handle_client_message(
            &mut page,
            ClientMessage::Change {
                value: "Rained all day".to_string(),
            },
        ));
        assert!(html.contains("id=\"diary-form\""));
        assert!(!html.contains("Rained all day"));

        let html = rendered(handle_client_message(&mut page, ClientMessage::Submit));
        assert!(html.contains("<span>Rained all day</span>"));

        let on_disk = store.load().unwrap();
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].description, "Rained all day");
    }

    #[test]
    fn test_reset_then_submit_appends_empty_entry() {
        let dir = tempdir().unwrap();
        let mut page = DiaryPage::mount(EntryStore::new(dir.path().join("diary.csv")));

        handle_client_message(
            &mut page,
            ClientMessage::Change {
                value: "draft".to_string(),
            },
        );
        handle_client_message(&mut page, ClientMessage::Reset);
        handle_client_message(&mut page, ClientMessage::Submit);

        assert_eq!(page.entries().len(), 1);
        assert_eq!(page.entries()[0].description, "");
    }

    #[test]
    fn test_ping_does_not_render() {
        let dir = tempdir().unwrap();
        let mut page = DiaryPage::mount(EntryStore::new(dir.path().join("diary.csv")));

        assert_eq!(
            handle_client_message(&mut page, ClientMessage::Ping),
            ServerMessage::Pong
        );
    }

    #[test]
    fn test_failed_page_keeps_rendering_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diary.csv");
        std::fs::write(&path, "nonsense\n").unwrap();
        let mut page = DiaryPage::mount(EntryStore::new(&path));

        let html = rendered(handle_client_message(&mut page, ClientMessage::Submit));
        assert!(html.contains("There is error"));
        assert!(!html.contains("<form"));
    }
}
