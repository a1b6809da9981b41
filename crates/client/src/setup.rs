//! Building the two fighters before a battle.
use std::io::{BufRead, Write};

use anyhow::{Context, Result, ensure};
use arena_content::EquipmentCatalog;
use arena_core::{CombatUnit, RngSource, UnitClassRegistry};
use tracing::debug;

use crate::console::Console;

const ENEMY_NAMES: [&str; 6] = ["Grimjaw", "Vessa", "Old Korr", "Mirelle", "Bron", "Thessaly"];

/// Walks the player through name, class, weapon and armor.
///
/// Console errors pass through unchanged so the caller can tell a closed input
/// apart from a real failure.
pub fn create_player<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    classes: &UnitClassRegistry,
    catalog: &EquipmentCatalog,
) -> Result<CombatUnit> {
    ensure!(!classes.is_empty(), "no unit classes to choose from");

    let name = console.ask_non_empty("What is your name?")?;

    let class_index = console.choose("Choose your class:", &classes.names())?;
    let class = classes
        .get_index(class_index)
        .context("class choice out of range")?;

    let weapon_index = console.choose("Choose your weapon:", &catalog.weapon_names())?;
    let weapon = catalog
        .weapons()
        .get(weapon_index)
        .cloned()
        .context("weapon choice out of range")?;

    let armor_index = console.choose("Choose your armor:", &catalog.armor_names())?;
    let armor = catalog
        .armors()
        .get(armor_index)
        .cloned()
        .context("armor choice out of range")?;

    let mut player = CombatUnit::player(name, class);
    console.say(player.equip_weapon(weapon))?;
    console.say(player.equip_armor(armor))?;
    Ok(player)
}

/// Rolls an enemy: name, class, weapon and armor are each one draw from `rng`.
///
/// `None` when there is nothing to draw from.
pub fn random_enemy(
    rng: &mut (impl RngSource + ?Sized),
    classes: &UnitClassRegistry,
    catalog: &EquipmentCatalog,
) -> Option<CombatUnit> {
    let name = *pick(rng, &ENEMY_NAMES[..])?;
    let class = classes.get_index(pick_index(rng, classes.len())?)?;
    let weapon = pick(rng, catalog.weapons())?.clone();
    let armor = pick(rng, catalog.armors())?.clone();

    debug!(
        target: "arena::client",
        name,
        class = %class.name,
        weapon = %weapon.name,
        armor = %armor.name,
        "enemy rolled"
    );

    let mut enemy = CombatUnit::enemy(name, class);
    enemy.equip_weapon(weapon);
    enemy.equip_armor(armor);
    Some(enemy)
}

fn pick_index(rng: &mut (impl RngSource + ?Sized), len: usize) -> Option<usize> {
    (len > 0).then(|| rng.next_u32() as usize % len)
}

fn pick<'a, T>(rng: &mut (impl RngSource + ?Sized), items: &'a [T]) -> Option<&'a T> {
    items.get(pick_index(rng, items.len())?)
}
