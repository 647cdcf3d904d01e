use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque property bag of an element. The server stores and relays it
/// without looking inside.
pub type Props = Map<String, Value>;

/// One drawable object of a room's canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub object_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: Props,
    /// Milliseconds since the Unix epoch, assigned by the server.
    pub created_at: i64,
}

impl Element {
    pub fn new(draft: ElementDraft) -> Self {
        Self {
            object_id: draft.object_id,
            kind: draft.kind,
            props: draft.props,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Shallow merge: top-level keys of the patch overwrite stored keys,
    /// every other key is kept as is.
    pub fn apply(&mut self, patch: ElementPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        self.props.extend(patch.props);
    }
}

/// Payload of `element:create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDraft {
    pub object_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: Props,
}

/// Payload of `element:modify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    pub object_id: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub props: Props,
}

/// Payload of `element:delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRef {
    pub object_id: String,
}
