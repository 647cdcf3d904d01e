use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Room joined when a client does not name one.
pub const DEFAULT_ROOM: &str = "1";

/// Externally supplied room name.
///
/// Clients send either strings or numbers (`"roomId": 2` and `"roomId": "2"`
/// address the same room), so deserialization coerces scalars to their
/// string form. An empty key falls back to [`DEFAULT_ROOM`].
#[derive(Debug, Serialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct RoomKey(String);

impl RoomKey {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        if key.trim().is_empty() {
            Self::default()
        } else {
            Self(key)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoomKey {
    fn default() -> Self {
        Self(DEFAULT_ROOM.to_owned())
    }
}

impl From<&str> for RoomKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoomKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RoomKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self::new(s)),
            Value::Number(n) => Ok(Self::new(n.to_string())),
            Value::Bool(b) => Ok(Self::new(b.to_string())),
            other => Err(de::Error::custom(format!(
                "room key must be a string or a number, got {other}"
            ))),
        }
    }
}
