use crate::model::{Cursor, ElementDraft, ElementPatch, ElementRef, RoomKey};
use crate::protocol::ProtocolError;
use serde::Deserialize;

/// Every frame a client may send, keyed by its `type` string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "join")]
    Join {
        #[serde(default, rename = "roomId")]
        room_id: Option<RoomKey>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },

    #[serde(rename = "room:switch")]
    SwitchRoom {
        #[serde(rename = "roomId")]
        room_id: RoomKey,
    },

    #[serde(rename = "presence")]
    Presence { cursor: Cursor },

    #[serde(rename = "user:update")]
    UpdateUser {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },

    #[serde(rename = "element:create", alias = "shape:create")]
    CreateElement { payload: ElementDraft },

    #[serde(rename = "element:modify")]
    ModifyElement { payload: ElementPatch },

    #[serde(rename = "element:delete")]
    DeleteElement { payload: ElementRef },

    #[serde(rename = "element:delete_all")]
    DeleteAllElements {},

    #[serde(rename = "leave", alias = "user:leave")]
    Leave {},
}

impl ClientMessage {
    /// Parses and validates one text frame.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let message: Self = serde_json::from_str(text)?;
        message.validate()?;
        Ok(message)
    }

    fn validate(&self) -> Result<(), ProtocolError> {
        let object_id = match self {
            ClientMessage::Presence { cursor } if !cursor.is_normalized() => {
                return Err(ProtocolError::Invalid {
                    field: "cursor",
                    reason: "coordinates must lie within 0..=1",
                });
            }
            ClientMessage::CreateElement { payload } => &payload.object_id,
            ClientMessage::ModifyElement { payload } => &payload.object_id,
            ClientMessage::DeleteElement { payload } => &payload.object_id,
            _ => return Ok(()),
        };

        if object_id.is_empty() {
            return Err(ProtocolError::Invalid {
                field: "objectId",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    /// Wire name of the message, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::Join { .. } => "join",
            ClientMessage::SwitchRoom { .. } => "room:switch",
            ClientMessage::Presence { .. } => "presence",
            ClientMessage::UpdateUser { .. } => "user:update",
            ClientMessage::CreateElement { .. } => "element:create",
            ClientMessage::ModifyElement { .. } => "element:modify",
            ClientMessage::DeleteElement { .. } => "element:delete",
            ClientMessage::DeleteAllElements {} => "element:delete_all",
            ClientMessage::Leave {} => "leave",
        }
    }
}
