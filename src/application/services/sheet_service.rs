//! Sheet Service - owns the live character record
//!
//! There is exactly one live character per session. Every mutation goes
//! through this service and is followed by an immediate whole-record save
//! to the local slot; the two remote operations are explicit and
//! all-or-nothing.

use anyhow::Result;
use tracing::{debug, info};

use crate::application::ports::outbound::{CharacterStorePort, RemoteSheetPort, RemoteStoreError};
use crate::domain::entities::{Character, Spell};
use crate::domain::reference;
use crate::domain::value_objects::{Ability, AbilityScores, SpellId};

/// Result of pulling the newest remote record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A record was found; local slot and live character now hold it
    Replaced,
    /// The remote table has no rows yet
    Empty,
}

pub struct SheetService {
    character: Character,
    store: Box<dyn CharacterStorePort>,
    remote: Option<Box<dyn RemoteSheetPort>>,
}

impl SheetService {
    /// Load the persisted record (or the default character) from the store
    pub fn new(
        store: Box<dyn CharacterStorePort>,
        remote: Option<Box<dyn RemoteSheetPort>>,
    ) -> Self {
        let character = store.load();
        Self {
            character,
            store,
            remote,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Apply one mutation and persist the whole record immediately
    fn apply(&mut self, mutate: impl FnOnce(&mut Character)) -> Result<()> {
        mutate(&mut self.character);
        self.store.save(&self.character)
    }

    // ---- Identity ----

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.apply(|c| c.name = name.to_string())
    }

    pub fn set_alignment(&mut self, alignment: &str) -> Result<()> {
        self.apply(|c| c.alignment = alignment.to_string())
    }

    pub fn set_background_title(&mut self, title: &str) -> Result<()> {
        self.apply(|c| c.background_title = title.to_string())
    }

    pub fn set_xp(&mut self, xp: u32) -> Result<()> {
        self.apply(|c| c.xp = xp)
    }

    pub fn set_level(&mut self, level: i32) -> Result<()> {
        self.apply(|c| c.set_level(level))
    }

    // ---- Choices ----

    pub fn select_race(&mut self, name: &str) -> Result<()> {
        if reference::race_by_name(name).is_none() {
            anyhow::bail!("unknown race: {name}");
        }
        self.apply(|c| {
            c.set_race(name);
        })
    }

    pub fn select_class(&mut self, name: &str) -> Result<()> {
        if reference::class_by_name(name).is_none() {
            anyhow::bail!("unknown class: {name}");
        }
        self.apply(|c| {
            c.set_class(name);
        })
    }

    // ---- Scores ----

    pub fn set_base_score(&mut self, ability: Ability, score: i32) -> Result<()> {
        self.apply(|c| c.set_base_score(ability, score))
    }

    pub fn set_flex_picks(&mut self, picks: &[Ability]) -> Result<()> {
        let mut outcome = Ok(());
        self.apply(|c| outcome = c.set_flex_picks(picks))?;
        outcome.map_err(|e| anyhow::anyhow!(e))
    }

    /// Toggle a single flexible pick; returns whether anything changed
    /// (a fresh pick is a no-op once the race's allowance is spent)
    pub fn toggle_flex_pick(&mut self, ability: Ability) -> Result<bool> {
        let mut changed = false;
        self.apply(|c| changed = c.toggle_flex_pick(ability))?;
        Ok(changed)
    }

    // ---- Skills ----

    pub fn toggle_skill(&mut self, name: &str) -> Result<bool> {
        let mut toggled = None;
        self.apply(|c| toggled = c.toggle_skill(name))?;
        toggled.ok_or_else(|| anyhow::anyhow!("unknown skill: {name}"))
    }

    // ---- Combat stats ----

    pub fn set_armor_class(&mut self, ac: i32) -> Result<()> {
        self.apply(|c| c.armor_class = ac)
    }

    pub fn set_initiative(&mut self, value: i32) -> Result<()> {
        self.apply(|c| c.set_initiative(value))
    }

    pub fn clear_initiative_override(&mut self) -> Result<()> {
        self.apply(|c| c.clear_initiative_override())
    }

    pub fn set_speed(&mut self, speed: i32) -> Result<()> {
        self.apply(|c| c.speed = speed)
    }

    pub fn set_max_hp(&mut self, hp: i32) -> Result<()> {
        self.apply(|c| c.max_hp = hp)
    }

    pub fn set_current_hp(&mut self, hp: i32) -> Result<()> {
        self.apply(|c| c.current_hp = hp)
    }

    pub fn set_temp_hp(&mut self, hp: i32) -> Result<()> {
        self.apply(|c| c.temp_hp = hp)
    }

    // ---- Spellcasting ----

    pub fn set_spell_slot(&mut self, level: usize, count: i64) -> Result<()> {
        let mut ok = false;
        self.apply(|c| ok = c.set_spell_slot(level, count))?;
        if !ok {
            anyhow::bail!("spell slot level must be between 1 and 9, got {level}");
        }
        Ok(())
    }

    pub fn add_spell(&mut self, spell: Spell) -> Result<SpellId> {
        let mut id = spell.id;
        self.apply(|c| id = c.add_spell(spell))?;
        Ok(id)
    }

    pub fn remove_spell(&mut self, id: SpellId) -> Result<()> {
        let mut removed = false;
        self.apply(|c| removed = c.remove_spell(id))?;
        if !removed {
            anyhow::bail!("no spell with id {id}");
        }
        Ok(())
    }

    // ---- Portrait and notes ----

    pub fn set_portrait(&mut self, portrait: Option<String>) -> Result<()> {
        self.apply(|c| c.portrait = portrait)
    }

    pub fn set_notes(&mut self, notes: &str) -> Result<()> {
        self.apply(|c| c.background_notes = notes.to_string())
    }

    // ---- Derived reads ----

    pub fn final_scores(&self) -> AbilityScores {
        self.character.final_scores()
    }

    pub fn proficiency_bonus(&self) -> i32 {
        self.character.proficiency_bonus()
    }

    pub fn skill_total(&self, name: &str) -> Option<i32> {
        reference::skill_by_name(name).map(|s| self.character.skill_total(s))
    }

    // ---- Remote operations ----

    /// Send the current record to the remote table as a new row
    pub async fn publish(&self) -> Result<(), RemoteStoreError> {
        let remote = self.remote.as_ref().ok_or(RemoteStoreError::Unconfigured)?;
        remote.publish(&self.character).await?;
        info!("published character to remote store");
        Ok(())
    }

    /// Pull the newest remote record; on success it overwrites both the
    /// local slot and the live character. Any failure leaves local state
    /// untouched.
    pub async fn fetch_latest(&mut self) -> Result<FetchOutcome> {
        let remote = self.remote.as_ref().ok_or(RemoteStoreError::Unconfigured)?;
        match remote.fetch_latest().await? {
            Some(fetched) => {
                self.store.save(&fetched)?;
                self.character = fetched;
                info!("replaced local character with remote record");
                Ok(FetchOutcome::Replaced)
            }
            None => {
                debug!("remote store has no rows yet");
                Ok(FetchOutcome::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    /// Store fake that records every save for inspection
    #[derive(Default)]
    struct RecordingStore {
        saved: Arc<Mutex<Vec<Character>>>,
        seed: Option<Character>,
    }

    impl CharacterStorePort for RecordingStore {
        fn load(&self) -> Character {
            self.seed.clone().unwrap_or_default()
        }

        fn save(&self, character: &Character) -> Result<()> {
            self.saved.lock().unwrap().push(character.clone());
            Ok(())
        }
    }

    /// Remote fake backed by an in-memory row list, newest last
    #[derive(Default)]
    struct FakeRemote {
        rows: Arc<Mutex<Vec<Character>>>,
    }

    #[async_trait]
    impl RemoteSheetPort for FakeRemote {
        async fn publish(&self, character: &Character) -> Result<(), RemoteStoreError> {
            self.rows.lock().unwrap().push(character.clone());
            Ok(())
        }

        async fn fetch_latest(&self) -> Result<Option<Character>, RemoteStoreError> {
            Ok(self.rows.lock().unwrap().last().cloned())
        }
    }

    fn service_with_recording_store() -> (SheetService, Arc<Mutex<Vec<Character>>>) {
        let store = RecordingStore::default();
        let saved = store.saved.clone();
        (SheetService::new(Box::new(store), None), saved)
    }

    #[test]
    fn every_mutation_persists_the_whole_record() {
        let (mut service, saved) = service_with_recording_store();
        service.set_name("Mira").unwrap();
        service.set_level(5).unwrap();
        service.toggle_skill("Perception").unwrap();

        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].name, "Mira");
        assert_eq!(saved[2].level, 5);
        assert!(saved[2].is_proficient("Perception"));
    }

    #[test]
    fn unknown_race_is_rejected_without_a_save() {
        let (mut service, saved) = service_with_recording_store();
        assert!(service.select_race("Lizardfolk").is_err());
        assert!(saved.lock().unwrap().is_empty());
        assert_eq!(service.character().race_name, "Human");
    }

    #[test]
    fn service_starts_from_the_persisted_record() {
        let mut seed = Character::default();
        seed.name = "Old Hand".to_string();
        let store = RecordingStore {
            seed: Some(seed),
            ..Default::default()
        };
        let service = SheetService::new(Box::new(store), None);
        assert_eq!(service.character().name, "Old Hand");
    }

    #[test]
    fn derived_reads_go_through_the_stat_engine() {
        let (mut service, _) = service_with_recording_store();
        service.set_level(5).unwrap();
        service.select_race("High Elf").unwrap(); // DEX 14 + 2 -> modifier +3
        service.toggle_skill("Stealth").unwrap();
        assert_eq!(service.proficiency_bonus(), 3);
        assert_eq!(service.skill_total("Stealth"), Some(6));
        assert_eq!(service.skill_total("Arcana"), Some(1));
        assert_eq!(service.skill_total("Basket Weaving"), None);
    }

    #[tokio::test]
    async fn publish_then_fetch_round_trips_the_record() {
        let remote = FakeRemote::default();
        let rows = remote.rows.clone();
        let store = RecordingStore::default();
        let saves = store.saved.clone();
        let mut service = SheetService::new(Box::new(store), Some(Box::new(remote)));

        service.set_name("Mira").unwrap();
        service.publish().await.unwrap();
        assert_eq!(rows.lock().unwrap().len(), 1);

        // wipe the live record, then pull the published one back
        service.set_name("someone else").unwrap();
        let outcome = service.fetch_latest().await.unwrap();
        assert_eq!(outcome, FetchOutcome::Replaced);
        assert_eq!(service.character().name, "Mira");
        // the fetched record also overwrote the local slot
        assert_eq!(saves.lock().unwrap().last().unwrap().name, "Mira");
    }

    #[tokio::test]
    async fn fetch_on_empty_remote_reports_the_distinct_condition() {
        let remote = FakeRemote::default();
        let store = RecordingStore::default();
        let saves = store.saved.clone();
        let mut service = SheetService::new(Box::new(store), Some(Box::new(remote)));

        let outcome = service.fetch_latest().await.unwrap();
        assert_eq!(outcome, FetchOutcome::Empty);
        // nothing was written locally
        assert!(saves.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_remote_is_reported_without_any_transport() {
        let (mut service, saved) = service_with_recording_store();

        let err = service.publish().await.unwrap_err();
        assert!(matches!(err, RemoteStoreError::Unconfigured));

        let err = service.fetch_latest().await.unwrap_err();
        let remote_err = err.downcast_ref::<RemoteStoreError>().unwrap();
        assert!(matches!(remote_err, RemoteStoreError::Unconfigured));
        assert!(saved.lock().unwrap().is_empty());
    }
}
