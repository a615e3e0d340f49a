//! charbldr - character builder core
//!
//! A 5e character sheet kept as a single local JSON record:
//! - derives modifiers, proficiency, and skill totals from the raw scores
//! - saves the whole record after every mutation
//! - optionally publishes to / fetches from a remote sheet table

mod application;
mod domain;
mod infrastructure;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::outbound::RemoteSheetPort;
use crate::application::services::{FetchOutcome, SheetService};
use crate::domain::entities::Spell;
use crate::domain::reference;
use crate::domain::value_objects::{Ability, SpellId};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::JsonFileStore;
use crate::infrastructure::remote::SupabaseSheets;

#[derive(Parser)]
#[command(name = "charbldr", about = "5e character sheet builder", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full sheet with derived values
    Show,
    /// Set an identity or combat field
    Set {
        #[command(subcommand)]
        field: SetField,
    },
    /// Set a base ability score (STR/DEX/CON/INT/WIS/CHA)
    Ability { key: String, score: String },
    /// Select a race by name
    Race { name: Vec<String> },
    /// Select a class by name
    Class { name: Vec<String> },
    /// Manage the racial flexible +1 picks
    Flex {
        #[command(subcommand)]
        action: FlexCommand,
    },
    /// Toggle proficiency in a skill
    Skill { name: Vec<String> },
    /// Set the slot count for a spell level (1-9)
    Slot { level: String, count: String },
    /// Manage the spell list
    Spell {
        #[command(subcommand)]
        action: SpellCommand,
    },
    /// Publish the current record to the remote sheet table
    Publish,
    /// Fetch the newest remote record, overwriting the local slot
    Fetch,
}

#[derive(Subcommand)]
enum SetField {
    Name { value: String },
    Alignment { value: String },
    Background { value: String },
    Xp { value: String },
    Level { value: String },
    Ac { value: String },
    Initiative { value: String },
    /// Drop the manual initiative override and track the DEX modifier again
    InitiativeAuto,
    Speed { value: String },
    MaxHp { value: String },
    CurrentHp { value: String },
    TempHp { value: String },
    Portrait { value: Option<String> },
    Notes { value: String },
}

#[derive(Subcommand)]
enum FlexCommand {
    /// Replace the picks wholesale
    Set { abilities: Vec<String> },
    /// Toggle one pick on or off
    Toggle { key: String },
}

#[derive(Subcommand)]
enum SpellCommand {
    /// Add a spell to the list
    Add {
        name: String,
        level: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        desc: Option<String>,
    },
    /// Remove a spell by id
    Remove { id: SpellId },
}

/// Malformed numeric input coerces to 0, never an error
fn num(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

fn num_wide(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_ability(raw: &str) -> Result<Ability> {
    raw.parse::<Ability>().map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charbldr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let store = JsonFileStore::new(config.sheet_path.clone());
    let remote: Option<Box<dyn RemoteSheetPort>> = match config.remote() {
        Some((url, key)) => Some(Box::new(SupabaseSheets::new(url, key))),
        None => {
            tracing::debug!("remote sheet store not configured, running local-only");
            None
        }
    };
    let mut service = SheetService::new(Box::new(store), remote);

    match cli.command {
        Command::Show => render_sheet(&service),
        Command::Set { field } => set_field(&mut service, field)?,
        Command::Ability { key, score } => {
            let ability = parse_ability(&key)?;
            service.set_base_score(ability, num(&score))?;
            println!(
                "{} base {} (final {}, modifier {:+})",
                ability,
                num(&score),
                service.final_scores().get(ability),
                domain::stats::modifier(service.final_scores().get(ability)),
            );
        }
        Command::Race { name } => {
            let name = name.join(" ");
            service.select_race(&name)?;
            println!("race set to {name}; flexible picks reset");
        }
        Command::Class { name } => {
            let name = name.join(" ");
            service.select_class(&name)?;
            let class = service.character().class();
            println!("class set to {} (d{}, primary {})", class.name, class.hit_die, class.primary);
        }
        Command::Flex { action } => {
            match action {
                FlexCommand::Set { abilities } => {
                    let picks = abilities
                        .iter()
                        .map(|a| parse_ability(a))
                        .collect::<Result<Vec<_>>>()?;
                    service.set_flex_picks(&picks)?;
                }
                FlexCommand::Toggle { key } => {
                    let ability = parse_ability(&key)?;
                    if !service.toggle_flex_pick(ability)? {
                        let race = service.character().race();
                        println!("{} allows {} flexible pick(s); unpick one first", race.name, race.flex);
                    }
                }
            }
            println!("flexible +1 picks: {:?}", service.character().flex_picks);
        }
        Command::Skill { name } => {
            let name = name.join(" ");
            let proficient = service.toggle_skill(&name)?;
            let total = service.skill_total(&name).unwrap_or_default();
            println!(
                "{name}: {} (total {total:+})",
                if proficient { "proficient" } else { "not proficient" }
            );
        }
        Command::Slot { level, count } => {
            let level = num_wide(&level).clamp(0, i64::from(u8::MAX)) as usize;
            service.set_spell_slot(level, num_wide(&count))?;
            println!("level {level} slots: {}", service.character().spell_slots[level - 1]);
        }
        Command::Spell { action } => match action {
            SpellCommand::Add { name, level, time, desc } => {
                let id = service.add_spell(Spell::new(name.clone(), num(&level), time, desc))?;
                println!("added {name} ({id})");
            }
            SpellCommand::Remove { id } => {
                service.remove_spell(id)?;
                println!("removed spell {id}");
            }
        },
        Command::Publish => {
            service.publish().await?;
            println!("character published to the remote store");
        }
        Command::Fetch => match service.fetch_latest().await? {
            FetchOutcome::Replaced => println!("loaded newest remote character"),
            FetchOutcome::Empty => println!("no remote character found yet"),
        },
    }

    Ok(())
}

fn set_field(service: &mut SheetService, field: SetField) -> Result<()> {
    match field {
        SetField::Name { value } => service.set_name(&value),
        SetField::Alignment { value } => service.set_alignment(&value),
        SetField::Background { value } => service.set_background_title(&value),
        SetField::Xp { value } => service.set_xp(num_wide(&value).clamp(0, i64::from(u32::MAX)) as u32),
        SetField::Level { value } => service.set_level(num(&value)),
        SetField::Ac { value } => service.set_armor_class(num(&value)),
        SetField::Initiative { value } => service.set_initiative(num(&value)),
        SetField::InitiativeAuto => service.clear_initiative_override(),
        SetField::Speed { value } => service.set_speed(num(&value)),
        SetField::MaxHp { value } => service.set_max_hp(num(&value)),
        SetField::CurrentHp { value } => service.set_current_hp(num(&value)),
        SetField::TempHp { value } => service.set_temp_hp(num(&value)),
        SetField::Portrait { value } => service.set_portrait(value),
        SetField::Notes { value } => service.set_notes(&value),
    }
}

fn render_sheet(service: &SheetService) {
    let c = service.character();
    let finals = service.final_scores();
    let race = c.race();
    let class = c.class();

    let name = if c.name.is_empty() { "(unnamed)" } else { c.name.as_str() };
    println!("=== {name} ===");
    println!(
        "{} {} {}, level {} ({} XP), {}",
        c.alignment, race.name, class.name, c.level, c.xp, c.background_title
    );
    println!(
        "hit die d{}, primary {}, proficiency {:+}",
        class.hit_die,
        class.primary,
        service.proficiency_bonus()
    );

    println!("\nAbilities (base -> final, modifier):");
    for ability in Ability::ALL {
        println!(
            "  {}  {:2} -> {:2}  ({:+})",
            ability,
            c.base_scores.get(ability),
            finals.get(ability),
            domain::stats::modifier(finals.get(ability)),
        );
    }
    if race.flex > 0 {
        println!(
            "  flexible +1 picks ({} of {}): {:?}",
            c.flex_picks.len(),
            race.flex,
            c.flex_picks
        );
    }

    println!(
        "\nAC {}  initiative {:+}{}  speed {} ft",
        c.armor_class,
        c.effective_initiative(),
        if c.initiative_overridden { " (manual)" } else { "" },
        c.speed
    );
    println!("HP {}/{} (+{} temp)", c.current_hp, c.max_hp, c.temp_hp);

    println!("\nSkills:");
    for skill in reference::SKILLS {
        println!(
            "  [{}] {:<18} ({})  {:+}",
            if c.is_proficient(skill.name) { "x" } else { " " },
            skill.name,
            skill.ability,
            c.skill_total(skill),
        );
    }

    let used_slots: Vec<String> = c
        .spell_slots
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .map(|(i, n)| format!("L{}: {}", i + 1, n))
        .collect();
    if !used_slots.is_empty() {
        println!("\nSpell slots: {}", used_slots.join(", "));
    }
    if !c.spells.is_empty() {
        println!("\nSpells:");
        for spell in &c.spells {
            print!("  L{} {}", spell.level, spell.name);
            if let Some(time) = &spell.casting_time {
                print!(" ({time})");
            }
            println!("  [{}]", spell.id);
            if let Some(desc) = &spell.description {
                println!("      {desc}");
            }
        }
    }
    if let Some(portrait) = &c.portrait {
        println!("\nPortrait: {portrait}");
    }
    if !c.background_notes.is_empty() {
        println!("\nNotes:\n{}", c.background_notes);
    }
}
