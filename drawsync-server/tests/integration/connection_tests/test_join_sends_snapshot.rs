use drawsync_core::{DEFAULT_ROOM, ServerMessage};
use serde_json::json;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_join_sends_snapshot() {
    init_tracing();

    let service = create_test_service();
    let mut alice = TestClient::connect(&service);
    let mut bob = TestClient::connect(&service);

    let (elements, users) = alice.join("1").await;
    assert!(elements.is_empty());
    assert!(users.is_empty());

    for id in ["e1", "e2", "e3"] {
        alice.send(json!({
            "type": "element:create",
            "payload": { "objectId": id, "type": "rectangle", "props": { "left": 1 } }
        }));
    }

    // Snapshot equals the store contents, in creation order.
    let (elements, users) = bob.join("1").await;
    let ids: Vec<_> = elements.iter().map(|e| e.object_id.as_str()).collect();
    assert_eq!(ids, ["e1", "e2", "e3"]);
    assert_eq!(elements, service.rooms().snapshot(&"1".into()));

    // users:init lists the others, never the joiner.
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, alice.id);

    match alice.recv().await {
        ServerMessage::UserJoined { id, name, color } => {
            let bob_state = service.registry().get(&bob.id).unwrap();
            assert_eq!(id, bob.id);
            assert_eq!(name, bob_state.name);
            assert_eq!(color, bob_state.color);
        }
        other => panic!("expected user:joined, got {:?}", other),
    }
    bob.assert_silent();
}

#[tokio::test]
async fn test_join_without_room_uses_default_room_and_profile() {
    init_tracing();

    let service = create_test_service();
    let mut alice = TestClient::connect(&service);
    let mut bob = TestClient::connect(&service);
    alice.join(DEFAULT_ROOM).await;

    bob.send(json!({ "type": "join", "name": "Bob", "color": "#123456" }));
    let (_, users) = bob.expect_init().await;
    assert_eq!(users.len(), 1);

    assert_eq!(
        alice.recv().await,
        ServerMessage::UserJoined {
            id: bob.id,
            name: "Bob".into(),
            color: "#123456".into(),
        }
    );
    assert_eq!(service.registry().room_of(&bob.id), Some(DEFAULT_ROOM.into()));
}

#[tokio::test]
async fn test_numeric_room_id_matches_string_room_id() {
    init_tracing();

    let service = create_test_service();
    let mut alice = TestClient::connect(&service);
    let mut bob = TestClient::connect(&service);
    alice.join("2").await;

    bob.send(json!({ "type": "join", "roomId": 2 }));
    let (_, users) = bob.expect_init().await;

    assert_eq!(users.len(), 1);
    assert!(matches!(alice.recv().await, ServerMessage::UserJoined { id, .. } if id == bob.id));
}
