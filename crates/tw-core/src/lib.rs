//! Core types for Taleweaver: rooms, characters, and the world file.
//!
//! This crate defines the static world model the engine plays against. A
//! [`World`] is loaded once from a JSON world file and is read-only for the
//! rest of the process; the player's position is tracked elsewhere.

/// Movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Non-player characters.
pub mod npc;
/// Room definitions.
pub mod room;
/// The world document and its validation.
pub mod world;

/// Re-export direction type.
pub use direction::Direction;
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export NPC type.
pub use npc::Npc;
/// Re-export room type.
pub use room::Room;
/// Re-export world document types.
pub use world::{PlayerStart, World};
