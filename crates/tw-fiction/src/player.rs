//! Player state.

/// The player's mutable state during a session.
///
/// The session is the only writer; every other component reads. The
/// `current_room` identifier always references an existing room — the start
/// room is validated at session construction and every later value comes
/// from a validated exit map.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Identifier of the room the player is currently in.
    pub current_room: String,
    /// Item identifiers carried by the player, in display order.
    /// Duplicates are allowed.
    pub inventory: Vec<String>,
}

impl PlayerState {
    /// Create a player state in the given room.
    pub fn new(current_room: impl Into<String>, inventory: Vec<String>) -> Self {
        Self {
            current_room: current_room.into(),
            inventory,
        }
    }
}
