//! WebSocket connection handlers.
//!
//! The connection host: accepts upgrades, owns each connection's read loop,
//! and reports closure exactly once into the leave path so that a silent drop
//! and an explicit LEAVE_ROOM converge to the same cleanup.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, RoomCode};
use crate::ui::state::AppState;

use super::router::route_text_message;

use serde::Deserialize;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub room_code: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // ルームコードを解決できない接続要求はアップグレード前に拒否する
    let room_code = match RoomCode::new(query.room_code.clone()) {
        Ok(code) => code,
        Err(_) => {
            tracing::warn!("Invalid room_code in connection request: '{}'", query.room_code);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_code)))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: broadcasts addressed to
/// this connection (via the rx channel) are written to its WebSocket.
///
/// # Arguments
///
/// * `rx` - Channel receiver for messages addressed to this connection
/// * `sender` - WebSocket sink to send messages to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, room_code: RoomCode) {
    // 接続を識別する不透明なハンドルを払い出す
    let connection = ConnectionId::generate();

    // Create a channel for this connection to receive broadcasts
    let (tx, rx) = mpsc::unbounded_channel();
    state.message_pusher.register_connection(connection, tx).await;
    tracing::info!(
        "Connection {} accepted for room '{}'",
        connection,
        room_code.as_str()
    );

    let (sender, mut receiver) = socket.split();

    // Spawn a task to receive broadcasts and send them to this client
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from {}: {}", connection, text);
                    route_text_message(&state_clone, connection, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection {} requested close", connection);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // 明示的な LEAVE_ROOM と同じ片付けに合流する（切断は一度だけ報告される）
    if let Some(session) = state.leave_room_usecase.execute(connection).await {
        tracing::info!(
            "Connection {} disconnected, '{}' removed from room '{}'",
            connection,
            session.participant_name.as_str(),
            session.room_code.as_str()
        );
    } else {
        tracing::debug!("Connection {} closed without an active session", connection);
    }
    state.message_pusher.unregister_connection(&connection).await;
}
