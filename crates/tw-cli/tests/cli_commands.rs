#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate has no public API to document

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Two rooms joined north/south; the library is guarded.
const WORLD: &str = r#"{
    "rooms": {
        "hall": {
            "name": "Great Hall",
            "meta_description": "stone hall, drafty, banners",
            "exits": {"north": "library"}
        },
        "library": {
            "name": "Library",
            "meta_description": "dusty shelves, one candle",
            "exits": {"south": "hall"},
            "npc": "guard"
        }
    },
    "npcs": {
        "guard": {
            "name": "the Guard",
            "meta_description": "weary gate guard, suspicious of strangers"
        }
    },
    "player": {"start_room": "hall", "inventory": ["lantern"]}
}"#;

fn world_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

/// The binary with generation credentials scrubbed: every completion
/// attempt fails fast, exercising the fallback path without any network.
fn tw() -> Command {
    let mut cmd = Command::cargo_bin("tw").unwrap();
    cmd.env_remove("OPENAI_API_KEY").env_remove("OPENAI_API_BASE");
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_world() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("2 rooms, 1 npcs"))
                .and(predicate::str::contains("start room: hall")),
        );
}

#[test]
fn check_rejects_dangling_exit() {
    let (_dir, path) = world_file(
        r#"{
            "rooms": {
                "hall": {
                    "name": "Great Hall",
                    "meta_description": "stone hall",
                    "exits": {"north": "nowhere"}
                }
            },
            "player": {"start_room": "hall"}
        }"#,
    );

    tw().args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown room \"nowhere\""));
}

#[test]
fn check_rejects_missing_start_room() {
    let (_dir, path) = world_file(
        r#"{
            "rooms": {
                "hall": {"name": "Great Hall", "meta_description": "stone hall"}
            },
            "player": {"start_room": "attic"}
        }"#,
    );

    tw().args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start room \"attic\""));
}

#[test]
fn check_rejects_unreadable_file() {
    tw().args(["check", "no-such-world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read world file"));
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_playable_world() {
    let parent = TempDir::new().unwrap();

    tw().args(["init", "myworld"])
        .current_dir(parent.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created world 'myworld'"));

    let world = parent.path().join("myworld/world.json");
    assert!(world.exists());

    tw().args(["check", world.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn init_fails_if_dir_exists() {
    let parent = TempDir::new().unwrap();
    fs::create_dir(parent.path().join("myworld")).unwrap();

    tw().args(["init", "myworld"])
        .current_dir(parent.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// play (credentials scrubbed — all narration takes the fallback path)
// ---------------------------------------------------------------------------

#[test]
fn play_quits_immediately() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to the Text Adventure!")
                .and(predicate::str::contains("Great Hall"))
                .and(predicate::str::contains("stone hall, drafty, banners"))
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn play_moves_into_the_library() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("north\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You move north to the Library.")
                .and(predicate::str::contains("dusty shelves, one candle"))
                .and(predicate::str::contains(
                    "the Guard says: \"The NPC stares silently, unable to respond.\"",
                )),
        );
}

#[test]
fn play_rejects_missing_exit() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("south\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You can't go that way."));
}

#[test]
fn play_talk_with_nobody_there() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("talk\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("There's no one here to talk to.")
                .and(predicate::str::contains("What do you say?").not()),
        );
}

#[test]
fn play_talk_prompts_for_utterance() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("north\ntalk\nWhere is the key?\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What do you say?").and(predicate::str::contains(
                "the Guard replies: \"The NPC stares silently, unable to respond.\"",
            )),
        );
}

#[test]
fn play_reports_unknown_commands() {
    let (_dir, path) = world_file(WORLD);

    tw().args(["play", path.to_str().unwrap()])
        .write_stdin("dance wildly\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand that command."));
}

#[test]
fn play_rejects_world_without_start_room() {
    let (_dir, path) = world_file(
        r#"{
            "rooms": {
                "hall": {"name": "Great Hall", "meta_description": "stone hall"}
            }
        }"#,
    );

    tw().args(["play", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start room"));
}
