use crate::room::ElementStore;
use drawsync_core::ConnectionId;

/// Members and canvas of one room. Always accessed through the
/// [`RoomDirectory`](crate::room::RoomDirectory) entry lock, so readers see
/// membership and elements in a mutually consistent state.
#[derive(Debug, Default)]
pub struct Room {
    members: Vec<ConnectionId>,
    elements: ElementStore,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the connection was already a member.
    pub fn add_member(&mut self, id: ConnectionId) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        self.members.push(id);
        true
    }

    pub fn remove_member(&mut self, id: &ConnectionId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member != id);
        self.members.len() != before
    }

    /// Members in join order.
    pub fn members(&self) -> &[ConnectionId] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ElementStore {
        &mut self.elements
    }
}
