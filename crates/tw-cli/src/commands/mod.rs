pub mod check;
pub mod init;
pub mod play;

use std::path::Path;

use tw_core::World;

/// Load and validate a world file, stringifying errors for the CLI surface.
fn load_world(path: &Path) -> Result<World, String> {
    World::load(path).map_err(|e| e.to_string())
}
