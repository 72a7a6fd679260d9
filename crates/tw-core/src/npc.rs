//! Non-player characters.

use serde::{Deserialize, Serialize};

/// A non-player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    /// Display label shown to the player.
    pub name: String,
    /// Personality and backstory summary used as generation input.
    ///
    /// Never shown to the player: when dialogue generation fails the
    /// fallback is a fixed phrase, not this text.
    pub meta_description: String,
}
