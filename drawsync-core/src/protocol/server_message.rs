use crate::model::{ConnectionId, Cursor, Element, UserInfo};
use serde::{Deserialize, Serialize};

/// Every frame the server emits, keyed by its `type` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Full element collection of the room, in creation order.
    #[serde(rename = "elements:init")]
    ElementsInit { elements: Vec<Element> },

    /// Other members of the room, in join order.
    #[serde(rename = "users:init")]
    UsersInit { users: Vec<UserInfo> },

    #[serde(rename = "user:joined")]
    UserJoined {
        id: ConnectionId,
        name: String,
        color: String,
    },

    #[serde(rename = "user:left")]
    UserLeft { id: ConnectionId },

    #[serde(rename = "user:updated")]
    UserUpdated {
        id: ConnectionId,
        name: String,
        color: String,
    },

    #[serde(rename = "presence")]
    Presence {
        id: ConnectionId,
        cursor: Cursor,
        name: String,
        color: String,
    },

    #[serde(rename = "element:created")]
    ElementCreated { element: Element },

    #[serde(rename = "element:modified")]
    ElementModified { element: Element },

    #[serde(rename = "element:deleted")]
    ElementDeleted {
        #[serde(rename = "objectId")]
        object_id: String,
    },

    #[serde(rename = "elements:cleared")]
    ElementsCleared {},
}

impl ServerMessage {
    pub fn user_joined(user: &UserInfo) -> Self {
        ServerMessage::UserJoined {
            id: user.id,
            name: user.name.clone(),
            color: user.color.clone(),
        }
    }

    pub fn user_updated(user: &UserInfo) -> Self {
        ServerMessage::UserUpdated {
            id: user.id,
            name: user.name.clone(),
            color: user.color.clone(),
        }
    }

    pub fn presence(user: &UserInfo, cursor: Cursor) -> Self {
        ServerMessage::Presence {
            id: user.id,
            cursor,
            name: user.name.clone(),
            color: user.color.clone(),
        }
    }

    /// Wire name of the message, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::ElementsInit { .. } => "elements:init",
            ServerMessage::UsersInit { .. } => "users:init",
            ServerMessage::UserJoined { .. } => "user:joined",
            ServerMessage::UserLeft { .. } => "user:left",
            ServerMessage::UserUpdated { .. } => "user:updated",
            ServerMessage::Presence { .. } => "presence",
            ServerMessage::ElementCreated { .. } => "element:created",
            ServerMessage::ElementModified { .. } => "element:modified",
            ServerMessage::ElementDeleted { .. } => "element:deleted",
            ServerMessage::ElementsCleared {} => "elements:cleared",
        }
    }
}
