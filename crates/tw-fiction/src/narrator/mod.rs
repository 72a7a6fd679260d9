//! Narrative generation with graceful fallback.
//!
//! The narrator turns a room's or character's terse meta description into
//! player-facing prose via a text-completion service. Both operations are
//! total: a failed call is logged and replaced with fallback text. The
//! fallback policy is asymmetric on purpose — a room falls back to its meta
//! description verbatim, while a character falls back to a fixed
//! unresponsive line so its meta description never reaches the player.

mod client;
mod config;
mod openai;

pub use client::{CompletionError, CompletionRequest, TextCompletion};
pub use config::NarratorConfig;
pub use openai::OpenAiClient;

use tracing::warn;
use tw_core::{Npc, Room};

/// Shown when dialogue generation fails.
pub const UNRESPONSIVE_LINE: &str = "The NPC stares silently, unable to respond.";

const ROOM_SYSTEM_PROMPT: &str = "You are a game narrative engine. Given a meta \
    description, produce a vivid, immersive, and thematically consistent room \
    description for players.";

/// The narrative generator: meta descriptions in, player-facing prose out.
pub struct Narrator {
    client: Box<dyn TextCompletion>,
    config: NarratorConfig,
}

impl Narrator {
    /// Create a narrator over the given completion client.
    pub fn new(client: Box<dyn TextCompletion>, config: NarratorConfig) -> Self {
        Self { client, config }
    }

    /// Describe a room for the player.
    ///
    /// Issues exactly one completion attempt. On failure the room's raw
    /// meta description is returned and a diagnostic is logged; the caller
    /// never sees an error.
    pub fn describe_room(&self, room: &Room) -> String {
        let request = self.request(
            ROOM_SYSTEM_PROMPT.to_string(),
            format!(
                "Meta description: {}. Please keep the room description to 2-3 sentences.",
                room.meta_description
            ),
        );

        match self.client.complete(&request) {
            Ok(text) => text,
            Err(err) => {
                warn!(room = %room.name, error = %err, "room description generation failed, showing meta description");
                room.meta_description.clone()
            }
        }
    }

    /// Produce a line of dialogue from a character.
    ///
    /// The character's personality rides in the system prompt; a present
    /// player utterance is appended to the user payload. Issues exactly one
    /// completion attempt. On failure the fixed [`UNRESPONSIVE_LINE`] is
    /// returned — never the character's meta description.
    pub fn npc_line(&self, npc: &Npc, player_utterance: Option<&str>) -> String {
        let system_prompt = format!(
            "You are a character in a text adventure game. Your personality: {}. \
             Respond in one or two sentences, in character.",
            npc.meta_description
        );
        let mut user_prompt = "The player has asked you something or approached you.".to_string();
        if let Some(utterance) = player_utterance {
            user_prompt.push_str("\nPlayer input: ");
            user_prompt.push_str(utterance);
        }

        match self.client.complete(&self.request(system_prompt, user_prompt)) {
            Ok(text) => text,
            Err(err) => {
                warn!(npc = %npc.name, error = %err, "dialogue generation failed, showing fallback line");
                UNRESPONSIVE_LINE.to_string()
            }
        }
    }

    fn request(&self, system_prompt: String, user_prompt: String) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            system_prompt,
            user_prompt,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}
