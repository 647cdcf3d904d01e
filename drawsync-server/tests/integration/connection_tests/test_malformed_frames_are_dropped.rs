use drawsync_core::ServerMessage;
use drawsync_server::Flow;
use serde_json::json;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_malformed_frames_are_dropped() {
    init_tracing();

    let service = create_test_service();
    let mut x = TestClient::connect(&service);
    let mut y = TestClient::connect(&service);
    x.join("1").await;
    y.join("1").await;
    x.drain();

    let garbage = [
        "",
        "not json",
        "[1,2,3]",
        r#"{"no_type":true}"#,
        r#"{"type":42}"#,
        r#"{"type":"teleport"}"#,
        r#"{"type":"room:switch"}"#,
        r#"{"type":"presence","cursor":{"x":2,"y":0}}"#,
        r#"{"type":"element:create","payload":{"type":"rectangle"}}"#,
        r#"{"type":"element:create","payload":{"objectId":"","type":"rectangle"}}"#,
        r#"{"type":"element:delete"}"#,
    ];
    for frame in garbage {
        assert_eq!(y.send_raw(frame), Flow::Continue, "frame {frame:?}");
    }

    x.assert_silent();
    y.assert_silent();
    assert!(service.rooms().snapshot(&"1".into()).is_empty());
    assert!(service.registry().contains(&y.id));

    // The connection keeps working afterwards.
    y.send(json!({
        "type": "element:create",
        "payload": { "objectId": "ok", "type": "circle", "props": {} }
    }));
    assert!(matches!(
        x.recv().await,
        ServerMessage::ElementCreated { element } if element.object_id == "ok"
    ));
}

#[tokio::test]
async fn test_room_bound_messages_before_join_are_dropped() {
    init_tracing();

    let service = create_test_service();
    let mut x = TestClient::connect(&service);
    let mut y = TestClient::connect(&service);
    y.join("1").await;

    let frames = [
        json!({ "type": "presence", "cursor": { "x": 0.1, "y": 0.1 } }),
        json!({ "type": "user:update", "name": "Nobody" }),
        json!({ "type": "room:switch", "roomId": "1" }),
        json!({
            "type": "element:create",
            "payload": { "objectId": "e1", "type": "rectangle", "props": {} }
        }),
        json!({ "type": "element:delete_all" }),
    ];
    for frame in frames {
        assert_eq!(x.send(frame), Flow::Continue);
    }

    x.assert_silent();
    y.assert_silent();
    assert!(service.rooms().snapshot(&"1".into()).is_empty());
    let state = service.registry().get(&x.id).unwrap();
    assert_eq!(state.room, None);
    assert_eq!(state.presence, None);
    assert_ne!(state.name, "Nobody");
}
