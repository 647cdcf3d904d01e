use drawsync_core::ServerMessage;
use serde_json::json;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestClient;

#[tokio::test]
async fn test_delete_all_clears_room() {
    init_tracing();

    let service = create_test_service();
    let mut x = TestClient::connect(&service);
    let mut y = TestClient::connect(&service);
    let mut z = TestClient::connect(&service);
    let mut other = TestClient::connect(&service);
    other.join("2").await;
    x.join("1").await;
    y.join("1").await;
    z.join("1").await;
    x.drain();
    y.drain();

    for id in ["a", "b"] {
        x.send(json!({
            "type": "element:create",
            "payload": { "objectId": id, "type": "path", "props": {} }
        }));
    }
    other.send(json!({
        "type": "element:create",
        "payload": { "objectId": "keep", "type": "path", "props": {} }
    }));
    y.drain();
    z.drain();

    x.send(json!({ "type": "element:delete_all" }));

    assert_eq!(y.drain(), vec![ServerMessage::ElementsCleared {}]);
    assert_eq!(z.drain(), vec![ServerMessage::ElementsCleared {}]);
    x.assert_silent();
    other.assert_silent();

    let mut w = TestClient::connect(&service);
    let (elements, users) = w.join("1").await;
    assert!(elements.is_empty());
    assert_eq!(users.len(), 3);

    assert_eq!(service.rooms().snapshot(&"2".into()).len(), 1);
}
