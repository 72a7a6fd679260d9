//! Room definitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// A single room in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Display label shown to the player.
    pub name: String,
    /// Terse factual summary used as generation input. Shown to the player
    /// only as the fallback when generation fails.
    pub meta_description: String,
    /// Exits, keyed by direction token.
    #[serde(default)]
    pub exits: HashMap<Direction, String>,
    /// Identifier of the character present in this room, if any.
    /// At most one character per room.
    #[serde(default)]
    pub npc: Option<String>,
}

impl Room {
    /// The room identifier an exit leads to, if there is an exit that way.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }
}
