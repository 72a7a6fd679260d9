//! Error types used throughout the crate.

use crate::direction::Direction;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised while loading or validating a world file.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("cannot read world file {path}: {source}")]
    Io {
        /// Path of the file that failed to read.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The world file is not valid JSON or does not match the schema.
    #[error("malformed world file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An exit points at a room identifier that does not exist.
    #[error("room \"{room}\" has an exit {direction} to unknown room \"{target}\"")]
    UnknownExitTarget {
        /// Room the exit belongs to.
        room: String,
        /// Direction of the dangling exit.
        direction: Direction,
        /// The unresolved target identifier.
        target: String,
    },

    /// A room references a character identifier that does not exist.
    #[error("room \"{room}\" references unknown npc \"{npc}\"")]
    UnknownNpc {
        /// Room carrying the reference.
        room: String,
        /// The unresolved character identifier.
        npc: String,
    },

    /// The configured start room does not exist.
    #[error("start room \"{0}\" is not defined in the world")]
    UnknownStartRoom(String),
}
