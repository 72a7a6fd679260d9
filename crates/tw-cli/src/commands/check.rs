use std::path::Path;

pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    world.validate_start_room().map_err(|e| e.to_string())?;

    println!("  All checks passed for '{}'.", world_path.display());
    println!("  {} rooms, {} npcs", world.rooms.len(), world.npcs.len());
    println!("  start room: {}", world.player.start_room);

    Ok(())
}
