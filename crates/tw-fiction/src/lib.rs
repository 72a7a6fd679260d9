//! Adventure engine for Taleweaver.
//!
//! Wires the static world model from `tw-core` to a text-completion
//! service: the narrator turns meta descriptions into player-facing prose,
//! falling back gracefully when the service fails; the session owns the
//! player's state and drives the move/look/talk transitions; the parser
//! classifies console input into a closed command set.

/// Narrative generation with graceful fallback.
pub mod narrator;
/// Command classification for console input.
pub mod parser;
/// Player state.
pub mod player;
/// Game session and state transitions.
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use narrator::{Narrator, NarratorConfig, OpenAiClient, TextCompletion, UNRESPONSIVE_LINE};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use session::Session;
