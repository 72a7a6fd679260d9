//! Game session and state transitions.

use tw_core::{Direction, Room, World, WorldResult};

use crate::narrator::Narrator;
use crate::parser::Command;
use crate::player::PlayerState;

/// A running game session.
///
/// Owns the static world, the player's mutable state, and the narrator.
/// The session is the only writer of player state; movement is the only
/// transition that mutates anything.
pub struct Session {
    world: World,
    player: PlayerState,
    narrator: Narrator,
}

impl Session {
    /// Create a session with the player in the world's configured start
    /// room.
    ///
    /// Fails if the start room is not a defined room — play never begins in
    /// an undefined location.
    pub fn new(world: World, narrator: Narrator) -> WorldResult<Self> {
        world.validate_start_room()?;
        let player = PlayerState::new(
            world.player.start_room.clone(),
            world.player.inventory.clone(),
        );
        Ok(Self {
            world,
            player,
            narrator,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's current state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Whether the current room has a character to talk to.
    pub fn npc_present(&self) -> bool {
        self.current_room().npc.is_some()
    }

    /// Execute a parsed command and return the text to display.
    ///
    /// Total: invalid commands are ordinary branches producing
    /// informational messages, and generation failures are absorbed by the
    /// narrator's fallback policy.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Move { direction } => self.move_to(direction),
            Command::Look => self.describe_current(),
            Command::Talk { utterance } => self.talk(utterance.as_deref()),
            Command::Quit => "Thanks for playing!".to_string(),
            Command::Unknown { .. } => "I don't understand that command.".to_string(),
        }
    }

    /// Move the player through an exit of the current room.
    ///
    /// On success the move is confirmed and the destination described in
    /// full; otherwise the player stays put and is told so.
    pub fn move_to(&mut self, direction: Direction) -> String {
        let Some(target) = self.current_room().exit(direction).map(str::to_string) else {
            return "You can't go that way.".to_string();
        };

        self.player.current_room = target;
        format!(
            "You move {direction} to the {}.\n\n{}",
            self.current_room().name,
            self.describe_current()
        )
    }

    /// Describe the current room, and let its occupant speak, if any.
    ///
    /// No state change. Always issues one generation call for the room and
    /// one more when a character is present; repeated calls are never
    /// suppressed.
    pub fn describe_current(&self) -> String {
        let room = self.current_room();
        let mut output = format!("{}\n{}", room.name, self.narrator.describe_room(room));

        if let Some(npc) = room.npc.as_deref().and_then(|id| self.world.npc(id)) {
            let line = self.narrator.npc_line(npc, None);
            output.push_str(&format!("\n\n{} says: \"{line}\"", npc.name));
        }

        output
    }

    /// Talk to the character in the current room.
    ///
    /// Without a character present this makes no external call at all.
    pub fn talk(&self, utterance: Option<&str>) -> String {
        let room = self.current_room();
        match room.npc.as_deref().and_then(|id| self.world.npc(id)) {
            Some(npc) => {
                let line = self.narrator.npc_line(npc, utterance);
                format!("{} replies: \"{line}\"", npc.name)
            }
            None => "There's no one here to talk to.".to_string(),
        }
    }

    fn current_room(&self) -> &Room {
        // current_room always references an existing room: the start room is
        // validated at construction, every transition target by World::load.
        &self.world.rooms[&self.player.current_room]
    }
}
