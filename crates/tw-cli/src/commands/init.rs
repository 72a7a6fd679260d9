use std::fs;
use std::path::Path;

const STARTER_WORLD: &str = r#"{
  "rooms": {
    "crossroads": {
      "name": "Crossroads",
      "meta_description": "dusty crossroads, leaning signpost, wheat fields all around",
      "exits": {"north": "tavern", "east": "chapel"}
    },
    "tavern": {
      "name": "Wayfarer's Tavern",
      "meta_description": "low-beamed taproom, peat fire, smell of stew",
      "exits": {"south": "crossroads"},
      "npc": "innkeep"
    },
    "chapel": {
      "name": "Ruined Chapel",
      "meta_description": "collapsed roof, ivy over the altar, cracked bell",
      "exits": {"west": "crossroads"}
    }
  },
  "npcs": {
    "innkeep": {
      "name": "Maro the Innkeep",
      "meta_description": "stout innkeeper, hears every rumor, fond of coin"
    }
  },
  "player": {
    "start_room": "crossroads",
    "inventory": []
  }
}
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);
    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    fs::write(dir.join("world.json"), STARTER_WORLD).map_err(|e| e.to_string())?;

    println!("Created world '{name}'.");
    println!("Play it with: tw play {name}/world.json");

    Ok(())
}
