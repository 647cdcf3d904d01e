use crate::registry::{ConnectionRegistry, ConnectionState};
use crate::room::{Room, RoomDirectory};
use crate::router::BroadcastRouter;
use drawsync_core::{
    ClientMessage, ConnectionId, Cursor, ElementDraft, ElementPatch, RoomKey, ServerMessage,
};
use std::sync::Arc;
use tracing::{debug, info};

/// What the connection task should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// Applies client messages to the registry and rooms and emits the
/// resulting broadcasts.
///
/// Each connection is either unjoined (`room == None`) or joined to exactly
/// one room. Messages that need a room are dropped while unjoined.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ConnectionRegistry>,
    rooms: Arc<RoomDirectory>,
    router: BroadcastRouter,
}

impl Dispatcher {
    pub fn new(registry: Arc<ConnectionRegistry>, rooms: Arc<RoomDirectory>) -> Self {
        let router = BroadcastRouter::new(registry.clone());
        Self {
            registry,
            rooms,
            router,
        }
    }

    pub fn dispatch(&self, id: ConnectionId, message: ClientMessage) -> Flow {
        debug!("Dispatching {} from {}", message.kind(), id);

        match message {
            ClientMessage::Join {
                room_id,
                name,
                color,
            } => self.join(id, room_id.unwrap_or_default(), name, color),

            ClientMessage::SwitchRoom { room_id } => self.switch_room(id, room_id),

            ClientMessage::Presence { cursor } => self.presence(id, cursor),

            ClientMessage::UpdateUser { name, color } => self.update_user(id, name, color),

            ClientMessage::CreateElement { payload } => self.create_element(id, payload),

            ClientMessage::ModifyElement { payload } => self.modify_element(id, payload),

            ClientMessage::DeleteElement { payload } => {
                self.delete_element(id, &payload.object_id)
            }

            ClientMessage::DeleteAllElements {} => self.delete_all(id),

            ClientMessage::Leave {} => {
                self.disconnect(id);
                return Flow::Close;
            }
        }

        Flow::Continue
    }

    /// Tears the connection down: unregisters it and tells its former room.
    /// Safe to call more than once; only the first call has an effect.
    pub fn disconnect(&self, id: ConnectionId) {
        let Some(state) = self.registry.unregister(&id) else {
            return;
        };

        if let Some(room) = state.room {
            self.leave_room(id, &room);
        }
        info!("Connection {} ({}) unregistered", id, state.name);
    }

    fn join(&self, id: ConnectionId, target: RoomKey, name: Option<String>, color: Option<String>) {
        let Some(state) = self
            .registry
            .update(&id, |state| apply_profile(state, name, color))
        else {
            return;
        };

        if let Some(current) = state.room.as_ref().filter(|current| **current != target) {
            self.leave_room(id, current);
        }
        self.enter_room(id, target);
    }

    fn switch_room(&self, id: ConnectionId, target: RoomKey) {
        let Some(current) = self.joined_room(id, "room:switch") else {
            return;
        };

        if current == target {
            self.rooms.with_room(&target, |room| self.send_init(id, room));
            return;
        }

        self.leave_room(id, &current);
        self.enter_room(id, target.clone());
        info!("{} switched from room {} to {}", id, current, target);
    }

    fn presence(&self, id: ConnectionId, cursor: Cursor) {
        let Some(room) = self.joined_room(id, "presence") else {
            return;
        };
        let Some(state) = self
            .registry
            .update(&id, |state| state.presence = Some(cursor))
        else {
            return;
        };

        self.router.broadcast(
            &self.rooms.members_of(&room),
            &id,
            &ServerMessage::presence(&state.user_info(), cursor),
        );
    }

    fn update_user(&self, id: ConnectionId, name: Option<String>, color: Option<String>) {
        let Some(room) = self.joined_room(id, "user:update") else {
            return;
        };
        let Some(state) = self
            .registry
            .update(&id, |state| apply_profile(state, name, color))
        else {
            return;
        };

        self.router.broadcast(
            &self.rooms.members_of(&room),
            &id,
            &ServerMessage::user_updated(&state.user_info()),
        );
    }

    fn create_element(&self, id: ConnectionId, draft: ElementDraft) {
        let Some(room) = self.joined_room(id, "element:create") else {
            return;
        };

        let object_id = draft.object_id.clone();
        let Some(created) = self.rooms.create_element(&room, draft) else {
            debug!("Ignoring duplicate create of {} in room {}", object_id, room);
            return;
        };

        self.router.broadcast(
            &created.members,
            &id,
            &ServerMessage::ElementCreated {
                element: created.value,
            },
        );
    }

    fn modify_element(&self, id: ConnectionId, patch: ElementPatch) {
        let Some(room) = self.joined_room(id, "element:modify") else {
            return;
        };

        let object_id = patch.object_id.clone();
        let Some(modified) = self.rooms.modify_element(&room, patch) else {
            debug!("Ignoring modify of missing element {} in room {}", object_id, room);
            return;
        };

        self.router.broadcast(
            &modified.members,
            &id,
            &ServerMessage::ElementModified {
                element: modified.value,
            },
        );
    }

    fn delete_element(&self, id: ConnectionId, object_id: &str) {
        let Some(room) = self.joined_room(id, "element:delete") else {
            return;
        };

        let Some(deleted) = self.rooms.delete_element(&room, object_id) else {
            debug!("Ignoring delete of missing element {} in room {}", object_id, room);
            return;
        };

        self.router.broadcast(
            &deleted.members,
            &id,
            &ServerMessage::ElementDeleted {
                object_id: deleted.value,
            },
        );
    }

    fn delete_all(&self, id: ConnectionId) {
        let Some(room) = self.joined_room(id, "element:delete_all") else {
            return;
        };

        let Some(cleared) = self.rooms.clear_elements(&room) else {
            return;
        };
        info!("{} cleared {} elements in room {}", id, cleared.value, room);

        self.router
            .broadcast(&cleared.members, &id, &ServerMessage::ElementsCleared {});
    }

    /// Init frames and the announcement are queued under the room lock, ahead
    /// of the fan-out of any later mutation.
    fn enter_room(&self, id: ConnectionId, target: RoomKey) {
        let Some(state) = self
            .registry
            .update(&id, |state| state.room = Some(target.clone()))
        else {
            return;
        };
        let user = state.user_info();

        let newly_joined = self.rooms.join(&target, id, |room, newly_joined| {
            self.send_init(id, room);
            let announcement = if newly_joined {
                ServerMessage::user_joined(&user)
            } else {
                ServerMessage::user_updated(&user)
            };
            self.router.broadcast(room.members(), &id, &announcement);
            newly_joined
        });

        if !self.registry.contains(&id) {
            // Closed while joining; the teardown may have missed the membership.
            self.leave_room(id, &target);
            return;
        }

        if newly_joined {
            info!("{} ({}) joined room {}", id, user.name, target);
        } else {
            info!("{} re-joined room {}", id, target);
        }
    }

    fn leave_room(&self, id: ConnectionId, room: &RoomKey) {
        self.registry.update(&id, |state| state.room = None);

        let Some(remaining) = self.rooms.leave(room, &id) else {
            return;
        };

        self.router
            .broadcast(&remaining, &id, &ServerMessage::UserLeft { id });
        info!("{} left room {}", id, room);
    }

    /// Must run under the room lock.
    fn send_init(&self, id: ConnectionId, room: &Room) {
        let users = room
            .members()
            .iter()
            .filter(|member| **member != id)
            .filter_map(|member| self.registry.user_info(member))
            .collect();

        self.router.send(
            &id,
            &ServerMessage::ElementsInit {
                elements: room.elements().snapshot(),
            },
        );
        self.router.send(&id, &ServerMessage::UsersInit { users });
    }

    fn joined_room(&self, id: ConnectionId, kind: &str) -> Option<RoomKey> {
        let room = self.registry.room_of(&id);
        if room.is_none() {
            debug!("Dropping {} from {}: not in a room", kind, id);
        }
        room
    }
}

fn apply_profile(state: &mut ConnectionState, name: Option<String>, color: Option<String>) {
    if let Some(name) = name {
        state.name = name;
    }
    if let Some(color) = color {
        state.color = color;
    }
}
