//! Integration tests for the native WebSocket client.
//!
//! These run against a local mock relayer speaking the channel envelope
//! (`{"messageType": …, "messageContent": …}`), so they need no network
//! access.

#![cfg(feature = "ws-native")]

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;

use dexfeed::shared::PairId;
use dexfeed::ws::native::WsClient;
use dexfeed::ws::{Kind, MessageOut, WsConfig, WsEvent};

const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Spawn a mock relayer on an ephemeral port and return its ws:// URL.
///
/// The server answers `ping` with a `PONG` envelope and any `subscribe` with
/// a single `TRADE` envelope, then keeps the connection open.
async fn spawn_mock_relayer() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let ws = tokio_tungstenite::accept_async(stream).await.expect("accept");
                let (mut sink, mut stream) = ws.split();

                while let Some(Ok(msg)) = stream.next().await {
                    let Message::Text(text) = msg else { continue };
                    let parsed: serde_json::Value =
                        serde_json::from_str(text.as_ref()).expect("client sends valid JSON");

                    match parsed["type"].as_str() {
                        Some("ping") => {
                            let pong = r#"{"messageType":"PONG"}"#;
                            let _ = sink.send(Message::Text(pong.into())).await;
                        }
                        Some("subscribe") => {
                            let trade = r#"{
                                "messageType": "TRADE",
                                "messageContent": {
                                    "token": "0xaa",
                                    "base": "0xbb",
                                    "traded_at": 1700000000,
                                    "price": "1250000",
                                    "volume": "30000000"
                                }
                            }"#;
                            let _ = sink.send(Message::Text(trade.into())).await;
                        }
                        _ => {}
                    }
                }
            });
        }
    });

    format!("ws://{}", addr)
}

fn test_config(url: String) -> WsConfig {
    WsConfig {
        url,
        reconnect: false,
        ..Default::default()
    }
}

/// Connect and wait for the `Connected` event.
async fn connected_client(url: String) -> WsClient {
    let mut client = WsClient::new(test_config(url));
    client.connect().await.expect("connect should succeed");
    wait_for_connected(&client).await;
    client
}

async fn wait_for_connected(client: &WsClient) {
    let events = client.events();
    tokio::pin!(events);

    let first = timeout(TEST_TIMEOUT, events.next())
        .await
        .expect("timed out waiting for Connected")
        .expect("event stream ended");

    assert!(
        matches!(first, WsEvent::Connected),
        "first event should be Connected, got: {first:?}"
    );
}

/// Wait for the next event that matches the predicate, ignoring others.
async fn next_matching(client: &WsClient, predicate: impl Fn(&WsEvent) -> bool) -> WsEvent {
    let events = client.events();
    tokio::pin!(events);

    timeout(TEST_TIMEOUT, async {
        while let Some(ev) = events.next().await {
            if predicate(&ev) {
                return ev;
            }
        }
        panic!("event stream ended without a matching event");
    })
    .await
    .expect("timed out waiting for matching event")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn connect_and_receive_connected_event() {
    let url = spawn_mock_relayer().await;
    let mut client = connected_client(url).await;
    assert!(client.is_connected());
    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn ping_pong() {
    let url = spawn_mock_relayer().await;
    let mut client = connected_client(url).await;

    client.send(MessageOut::ping()).expect("send ping");

    let pong = next_matching(&client, |ev| matches!(ev, WsEvent::Message(Kind::Pong))).await;
    assert!(matches!(pong, WsEvent::Message(Kind::Pong)));

    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn subscribe_trades_receives_trade() {
    let url = spawn_mock_relayer().await;
    let mut client = connected_client(url).await;

    client
        .send(MessageOut::subscribe_trades(vec![PairId::new("0xaa/0xbb")]))
        .expect("subscribe trades");

    let event = next_matching(&client, |ev| {
        matches!(ev, WsEvent::Message(Kind::Trade(_)))
    })
    .await;

    match event {
        WsEvent::Message(Kind::Trade(trade)) => {
            assert_eq!(trade.token.as_str(), "0xaa");
            assert_eq!(trade.base.as_str(), "0xbb");
            assert_eq!(trade.price, "1250000");
        }
        other => panic!("expected Trade, got: {other:?}"),
    }

    client.disconnect().await.unwrap();
}

#[tokio::test]
async fn graceful_disconnect() {
    let url = spawn_mock_relayer().await;
    let mut client = connected_client(url).await;
    assert!(client.is_connected());

    client.disconnect().await.expect("disconnect should succeed");
    assert!(!client.is_connected());
}

#[tokio::test]
async fn subscribe_then_ping_keeps_connection_alive() {
    let url = spawn_mock_relayer().await;
    let mut client = connected_client(url).await;

    client
        .send(MessageOut::subscribe_trades(vec![PairId::new("0xaa/0xbb")]))
        .expect("subscribe trades");

    next_matching(&client, |ev| {
        matches!(ev, WsEvent::Message(Kind::Trade(_)))
    })
    .await;

    client.send(MessageOut::ping()).expect("send ping");
    let event = next_matching(&client, |ev| matches!(ev, WsEvent::Message(Kind::Pong))).await;
    assert!(matches!(event, WsEvent::Message(Kind::Pong)));

    client.disconnect().await.unwrap();
}
