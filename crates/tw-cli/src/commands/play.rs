//! The interactive command loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tw_fiction::narrator::{Narrator, NarratorConfig, OpenAiClient};
use tw_fiction::parser::{Command, parse_command};
use tw_fiction::session::Session;

pub fn run(world_path: &Path, model: Option<&str>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut config = NarratorConfig::new();
    if let Some(model) = model {
        config = config.with_model(model);
    }
    let narrator = Narrator::new(Box::new(OpenAiClient::from_env()), config);
    let mut session = Session::new(world, narrator).map_err(|e| e.to_string())?;

    println!("{}", "Welcome to the Text Adventure!".bold());
    println!("{}", session.describe_current());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let mut command = parse_command(&line.map_err(|e| e.to_string())?);

        // A bare `talk` asks what to say first, but only when someone is
        // actually there to hear it.
        if matches!(command, Command::Talk { utterance: None }) && session.npc_present() {
            print!("What do you say? ");
            flush()?;
            if let Some(said) = lines.next() {
                let said = said.map_err(|e| e.to_string())?.trim().to_string();
                if !said.is_empty() {
                    command = Command::Talk {
                        utterance: Some(said),
                    };
                }
            }
        }

        let quitting = matches!(command, Command::Quit);
        println!("{}", session.execute(command));
        if quitting {
            break;
        }
    }

    Ok(())
}

fn flush() -> Result<(), String> {
    io::stdout().flush().map_err(|e| e.to_string())
}
