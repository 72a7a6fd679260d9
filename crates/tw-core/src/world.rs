//! The world document and its validation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::npc::Npc;
use crate::room::Room;

/// The player's configured starting position and belongings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStart {
    /// Identifier of the room the player begins in.
    #[serde(default)]
    pub start_room: String,
    /// Item identifiers the player begins with, in display order.
    /// Duplicates are allowed.
    #[serde(default)]
    pub inventory: Vec<String>,
}

/// The static world definition, loaded once at startup.
///
/// Read-only during play. A loaded world is internally consistent: every
/// exit target and character reference resolves. Whether it is *playable*
/// (has a valid start room) is checked separately, so a world file with no
/// `player` section still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// All rooms, keyed by identifier.
    #[serde(default)]
    pub rooms: HashMap<String, Room>,
    /// All characters, keyed by identifier.
    #[serde(default)]
    pub npcs: HashMap<String, Npc>,
    /// The player's starting state.
    #[serde(default)]
    pub player: PlayerStart,
}

impl World {
    /// Parse a world from a JSON document and validate its references.
    pub fn from_json(source: &str) -> WorldResult<Self> {
        let world: Self = serde_json::from_str(source)?;
        world.validate()?;
        Ok(world)
    }

    /// Load and validate a world file.
    pub fn load(path: &Path) -> WorldResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Get a room by identifier.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a character by identifier.
    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Check that every exit target and character reference resolves.
    pub fn validate(&self) -> WorldResult<()> {
        for (id, room) in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::UnknownExitTarget {
                        room: id.clone(),
                        direction: *direction,
                        target: target.clone(),
                    });
                }
            }
            if let Some(npc) = &room.npc {
                if !self.npcs.contains_key(npc) {
                    return Err(WorldError::UnknownNpc {
                        room: id.clone(),
                        npc: npc.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that the configured start room exists.
    ///
    /// Kept apart from [`World::validate`]: a world without a playable start
    /// is loadable, but play must refuse to begin in an undefined location.
    pub fn validate_start_room(&self) -> WorldResult<()> {
        if self.rooms.contains_key(&self.player.start_room) {
            Ok(())
        } else {
            Err(WorldError::UnknownStartRoom(self.player.start_room.clone()))
        }
    }
}
