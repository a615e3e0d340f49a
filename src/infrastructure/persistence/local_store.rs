//! Local slot adapter - one character as one JSON file

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::ports::outbound::CharacterStorePort;
use crate::domain::entities::Character;

/// File-backed implementation of the local persistence slot
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CharacterStorePort for JsonFileStore {
    fn load(&self) -> Character {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %self.path.display(), "no persisted character, starting fresh");
                return Character::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(character) => character,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e,
                    "persisted character did not parse, starting fresh");
                Character::default()
            }
        }
    }

    fn save(&self, character: &Character) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(character)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing character to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("character.json"))
    }

    #[test]
    fn absent_slot_loads_the_default_character() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), Character::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        // default record round-trips unchanged
        let fresh = store.load();
        store.save(&fresh).unwrap();
        assert_eq!(store.load(), fresh);

        // and so does a mutated one
        let mut character = fresh;
        character.name = "Mira".to_string();
        character.set_level(9);
        character.toggle_skill("Arcana");
        character.set_spell_slot(5, 2);
        store.save(&character).unwrap();
        assert_eq!(store.load(), character);
    }

    #[test]
    fn malformed_slot_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("character.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(path);
        assert_eq!(store.load(), Character::default());
    }

    #[test]
    fn save_overwrites_the_single_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut first = Character::default();
        first.name = "First".to_string();
        store.save(&first).unwrap();
        let mut second = Character::default();
        second.name = "Second".to_string();
        store.save(&second).unwrap();
        assert_eq!(store.load().name, "Second");
    }
}
