//! CLI frontend for the Taleweaver adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tw",
    about = "Taleweaver — a text adventure narrated by a language model",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively
    Play {
        /// Path to the world file (JSON)
        world: PathBuf,

        /// Override the completion model
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Validate a world file and print a summary
    Check {
        /// Path to the world file (JSON)
        world: PathBuf,
    },

    /// Create a new world directory with a starter world file
    Init {
        /// Name of the world to create
        name: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world, model } => commands::play::run(&world, model.as_deref()),
        Commands::Check { world } => commands::check::run(&world),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
