use crate::model::ConnectionId;
use serde::{Deserialize, Serialize};

/// Public identity of a participant as other members see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: ConnectionId,
    pub name: String,
    pub color: String,
}
