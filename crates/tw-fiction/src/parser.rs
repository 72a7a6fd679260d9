//! Command classification for console input.

use tw_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move in a direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Describe the current room again.
    Look,
    /// Talk to whoever is in the room.
    Talk {
        /// Words following the verb on the same line, spoken to the
        /// character. A bare `talk` leaves this empty.
        utterance: Option<String>,
    },
    /// Quit the game.
    Quit,
    /// Anything the engine does not understand.
    Unknown {
        /// The input as classified.
        input: String,
    },
}

/// Parse one line of player input into a command.
///
/// The line is trimmed and lowercased before classification. Recognized
/// forms: `quit`/`exit`, a bare direction token, `look`/`examine`, and any
/// line whose first word begins with `talk`. Everything else — including an
/// unknown direction word — is [`Command::Unknown`].
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" | "exit" => return Command::Quit,
        "look" | "examine" => return Command::Look,
        _ => {}
    }

    if let Some(direction) = Direction::parse(&input) {
        return Command::Move { direction };
    }

    let mut words = input.split_whitespace();
    if words.next().is_some_and(|verb| verb.starts_with("talk")) {
        let utterance = words.collect::<Vec<_>>().join(" ");
        return Command::Talk {
            utterance: (!utterance.is_empty()).then_some(utterance),
        };
    }

    Command::Unknown { input }
}
