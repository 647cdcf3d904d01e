use drawsync_core::ServerMessage;
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{WsClient, spawn_server};

#[tokio::test]
async fn test_create_fans_out_over_sockets() {
    init_tracing();

    let addr = spawn_server().await;
    let mut y = WsClient::connect(addr).await;
    let mut z = WsClient::connect(addr).await;
    let mut x = WsClient::connect(addr).await;
    y.join("1").await;
    z.join("2").await;
    x.join("1").await;
    assert!(matches!(y.recv().await, ServerMessage::UserJoined { .. }));

    x.send(json!({
        "type": "element:create",
        "payload": { "objectId": "e1", "type": "rectangle", "props": { "left": 10, "top": 10 } }
    }))
    .await;

    match y.recv().await {
        ServerMessage::ElementCreated { element } => {
            assert_eq!(element.object_id, "e1");
            assert_eq!(element.props.get("left"), Some(&json!(10)));
        }
        other => panic!("expected element:created, got {:?}", other),
    }
    z.assert_silent().await;
    x.assert_silent().await;
}

#[tokio::test]
async fn test_delete_all_then_join_sees_empty_room() {
    init_tracing();

    let addr = spawn_server().await;
    let mut x = WsClient::connect(addr).await;
    let mut y = WsClient::connect(addr).await;
    x.join("1").await;
    y.join("1").await;
    assert!(matches!(x.recv().await, ServerMessage::UserJoined { .. }));

    x.send(json!({
        "type": "element:create",
        "payload": { "objectId": "e1", "type": "rectangle", "props": {} }
    }))
    .await;
    assert!(matches!(y.recv().await, ServerMessage::ElementCreated { .. }));

    x.send(json!({ "type": "element:delete_all" })).await;
    assert_eq!(y.recv().await, ServerMessage::ElementsCleared {});

    let mut w = WsClient::connect(addr).await;
    w.send(json!({ "type": "join", "roomId": "1" })).await;
    assert_eq!(
        w.recv().await,
        ServerMessage::ElementsInit {
            elements: Vec::new()
        }
    );
    match w.recv().await {
        ServerMessage::UsersInit { users } => assert_eq!(users.len(), 2),
        other => panic!("expected users:init, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dropped_socket_announces_leave_once() {
    init_tracing();

    let addr = spawn_server().await;
    let mut x = WsClient::connect(addr).await;
    let mut y = WsClient::connect(addr).await;
    y.join("1").await;
    x.join("1").await;
    let x_id = match y.recv().await {
        ServerMessage::UserJoined { id, .. } => id,
        other => panic!("expected user:joined, got {:?}", other),
    };

    drop(x);

    assert_eq!(y.recv().await, ServerMessage::UserLeft { id: x_id });
    y.assert_silent().await;
}

#[tokio::test]
async fn test_explicit_leave_then_close() {
    init_tracing();

    let addr = spawn_server().await;
    let mut x = WsClient::connect(addr).await;
    let mut y = WsClient::connect(addr).await;
    y.join("1").await;
    x.join("1").await;
    let x_id = match y.recv().await {
        ServerMessage::UserJoined { id, .. } => id,
        other => panic!("expected user:joined, got {:?}", other),
    };

    x.send(json!({ "type": "leave" })).await;
    assert_eq!(y.recv().await, ServerMessage::UserLeft { id: x_id });

    x.close().await;
    y.assert_silent().await;
}

#[tokio::test]
async fn test_malformed_frame_keeps_socket_open() {
    init_tracing();

    let addr = spawn_server().await;
    let mut x = WsClient::connect(addr).await;
    let mut y = WsClient::connect(addr).await;
    x.join("1").await;
    y.join("1").await;
    assert!(matches!(x.recv().await, ServerMessage::UserJoined { .. }));

    y.send_raw("{ this is not json").await;
    y.send(json!({ "type": "no:such:type" })).await;
    y.send(json!({
        "type": "element:create",
        "payload": { "objectId": "after", "type": "text", "props": {} }
    }))
    .await;

    assert!(matches!(
        x.recv().await,
        ServerMessage::ElementCreated { element } if element.object_id == "after"
    ));
}
