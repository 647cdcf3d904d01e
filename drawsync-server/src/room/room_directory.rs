use crate::room::Room;
use dashmap::DashMap;
use drawsync_core::{ConnectionId, Element, ElementDraft, ElementPatch, RoomKey};
use tracing::info;

/// Result of a room mutation together with the membership observed when it
/// was applied, so the fan-out happens after the lock is released.
#[derive(Debug, Clone)]
pub struct Fanout<T> {
    pub value: T,
    pub members: Vec<ConnectionId>,
}

/// Maps room keys to their members and element collection.
///
/// Rooms are created lazily on first join and reclaimed, elements included,
/// when the last member leaves. Which room a connection is in is recorded by
/// the [`ConnectionRegistry`](crate::registry::ConnectionRegistry), not here.
#[derive(Default)]
pub struct RoomDirectory {
    rooms: DashMap<RoomKey, Room>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the connection and runs `on_joined` while the room is still
    /// locked, so anything it queues precedes the fan-out of every later
    /// mutation. The flag is `false` when the connection was already a member.
    pub fn join<R, F>(&self, key: &RoomKey, id: ConnectionId, on_joined: F) -> R
    where
        F: FnOnce(&Room, bool) -> R,
    {
        let mut room = self.rooms.entry(key.clone()).or_insert_with(|| {
            info!("Creating room {}", key);
            Room::new()
        });
        let newly_joined = room.add_member(id);
        on_joined(room.value(), newly_joined)
    }

    /// Removes the connection and returns the members left behind, or `None`
    /// if it was not in that room.
    pub fn leave(&self, key: &RoomKey, id: &ConnectionId) -> Option<Vec<ConnectionId>> {
        let remaining = {
            let mut room = self.rooms.get_mut(key)?;
            if !room.remove_member(id) {
                return None;
            }
            room.members().to_vec()
        };

        // Re-checked under the lock: someone may have joined in between.
        if remaining.is_empty() && self.rooms.remove_if(key, |_, room| room.is_empty()).is_some()
        {
            info!("Reclaimed empty room {}", key);
        }

        Some(remaining)
    }

    pub fn members_of(&self, key: &RoomKey) -> Vec<ConnectionId> {
        self.rooms
            .get(key)
            .map(|room| room.members().to_vec())
            .unwrap_or_default()
    }

    /// Current elements of the room in creation order; empty for unknown rooms.
    pub fn snapshot(&self, key: &RoomKey) -> Vec<Element> {
        self.rooms
            .get(key)
            .map(|room| room.elements().snapshot())
            .unwrap_or_default()
    }

    pub fn contains_room(&self, key: &RoomKey) -> bool {
        self.rooms.contains_key(key)
    }

    /// Runs `f` with exclusive access to the room, if it exists.
    pub fn with_room<R, F>(&self, key: &RoomKey, f: F) -> Option<R>
    where
        F: FnOnce(&mut Room) -> R,
    {
        let mut room = self.rooms.get_mut(key)?;
        Some(f(room.value_mut()))
    }

    /// `None` if the room is gone or the id already exists.
    pub fn create_element(&self, key: &RoomKey, draft: ElementDraft) -> Option<Fanout<Element>> {
        self.with_room(key, |room| {
            let element = room.elements_mut().create(draft)?;
            Some(Fanout {
                value: element,
                members: room.members().to_vec(),
            })
        })
        .flatten()
    }

    /// `None` if the room or the element is gone.
    pub fn modify_element(&self, key: &RoomKey, patch: ElementPatch) -> Option<Fanout<Element>> {
        self.with_room(key, |room| {
            let element = room.elements_mut().modify(patch)?;
            Some(Fanout {
                value: element,
                members: room.members().to_vec(),
            })
        })
        .flatten()
    }

    /// `None` unless an element was actually removed.
    pub fn delete_element(&self, key: &RoomKey, object_id: &str) -> Option<Fanout<String>> {
        self.with_room(key, |room| {
            room.elements_mut().delete(object_id).then(|| Fanout {
                value: object_id.to_owned(),
                members: room.members().to_vec(),
            })
        })
        .flatten()
    }

    /// Clears the room's canvas; the value is the number of removed elements.
    pub fn clear_elements(&self, key: &RoomKey) -> Option<Fanout<usize>> {
        self.with_room(key, |room| Fanout {
            value: room.elements_mut().delete_all(),
            members: room.members().to_vec(),
        })
    }
}
