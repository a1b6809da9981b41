//! Loading content from files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use arena_content::{CatalogLoadError, ClassLoader, ContentFactory, EquipmentLoader};
use arena_core::{ArenaConfig, GameError, SkillEffect, UnitClassRegistry};
use tempfile::TempDir;

const EQUIPMENT_JSON: &str = r#"{
  "weapons": [
    { "id": 1, "name": "hatchet", "min_damage": 2.5, "max_damage": 4.1, "stamina_per_hit": 1.5 },
    { "id": 2, "name": "knife", "min_damage": 1.2, "max_damage": 2.5, "stamina_per_hit": 0.8 }
  ],
  "armors": [
    { "id": 1, "name": "t-shirt", "defence": 0.5, "stamina_per_turn": 0.1 },
    { "id": 2, "name": "leather armor", "defence": 1.5, "stamina_per_turn": 0.5 }
  ]
}"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn json_catalog_keeps_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "equipment.json", EQUIPMENT_JSON);

    let catalog = EquipmentLoader::load(&path).unwrap();

    assert_eq!(catalog.weapon_names(), vec!["hatchet", "knife"]);
    assert_eq!(catalog.armor_names(), vec!["t-shirt", "leather armor"]);

    let hatchet = catalog.weapon("hatchet").unwrap();
    assert_eq!(hatchet.min_damage, 2.5);
    assert_eq!(hatchet.max_damage, 4.1);
    assert_eq!(hatchet.stamina_per_hit, 1.5);
    assert_eq!(catalog.armor("leather armor").unwrap().defence, 1.5);

    assert!(catalog.weapon("axe").is_none());
    assert!(catalog.armor("Leather Armor").is_none());
}

#[test]
fn missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = EquipmentLoader::load(&temp_dir.path().join("equipment.json")).unwrap_err();

    assert!(matches!(err, CatalogLoadError::Io { .. }), "{err}");
    assert_eq!(err.error_code(), "CATALOG_IO");
}

#[test]
fn malformed_json_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "equipment.json", "{ \"weapons\": [");

    let err = EquipmentLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Parse { .. }), "{err}");
}

#[test]
fn wrong_field_type_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "equipment.json",
        r#"{
          "weapons": [{ "id": 1, "name": "stick", "min_damage": "low", "max_damage": 2.8, "stamina_per_hit": 1.0 }],
          "armors": [{ "id": 1, "name": "t-shirt", "defence": 0.5, "stamina_per_turn": 0.1 }]
        }"#,
    );

    let err = EquipmentLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Parse { .. }), "{err}");
}

#[test]
fn unknown_field_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "equipment.json",
        r#"{
          "weapons": [{ "id": 1, "name": "stick", "min_damage": 1.0, "max_damage": 2.8, "stamina_per_hit": 1.0, "weight": 3 }],
          "armors": [{ "id": 1, "name": "t-shirt", "defence": 0.5, "stamina_per_turn": 0.1 }]
        }"#,
    );

    let err = EquipmentLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Parse { .. }), "{err}");
}

#[test]
fn negative_defence_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "equipment.json",
        r#"{
          "weapons": [{ "id": 1, "name": "stick", "min_damage": 1.0, "max_damage": 2.8, "stamina_per_hit": 1.0 }],
          "armors": [{ "id": 1, "name": "t-shirt", "defence": -0.5, "stamina_per_turn": 0.1 }]
        }"#,
    );

    let err = EquipmentLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Invalid { .. }), "{err}");
    assert!(err.to_string().contains("armor `t-shirt`"), "{err}");
    assert!(!err.severity().is_recoverable());
}

#[test]
fn unknown_extension_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "equipment.yaml", "weapons: []\n");

    let err = EquipmentLoader::load(&path).unwrap_err();
    assert!(
        matches!(err, CatalogLoadError::UnsupportedFormat { .. }),
        "{err}"
    );
}

#[test]
fn ron_and_toml_catalogs_load() {
    let temp_dir = TempDir::new().unwrap();
    let ron_path = write(
        temp_dir.path(),
        "equipment.ron",
        r#"(
            weapons: [(id: 1, name: "stick", min_damage: 1.0, max_damage: 2.8, stamina_per_hit: 1.0)],
            armors: [(id: 1, name: "t-shirt", defence: 0.5, stamina_per_turn: 0.1)],
        )"#,
    );
    let toml_path = write(
        temp_dir.path(),
        "equipment.toml",
        r#"
[[weapons]]
id = 1
name = "stick"
min_damage = 1.0
max_damage = 2.8
stamina_per_hit = 1.0

[[armors]]
id = 1
name = "t-shirt"
defence = 0.5
stamina_per_turn = 0.1
"#,
    );

    let from_ron = EquipmentLoader::load(&ron_path).unwrap();
    let from_toml = EquipmentLoader::load(&toml_path).unwrap();

    assert_eq!(from_ron, from_toml);
    assert_eq!(from_ron.weapon("stick").unwrap().max_damage, 2.8);
}

#[test]
fn class_table_loads_in_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "classes.ron",
        r#"(
            classes: [
                (
                    name: "Knight",
                    max_health: 70.0,
                    max_stamina: 20.0,
                    attack: 1.0,
                    stamina: 0.8,
                    armor: 1.4,
                    skill: (name: "Shield Bash", stamina_cost: 4.0, effect: Strike(damage: 9.0)),
                ),
                (
                    name: "Druid",
                    max_health: 50.0,
                    max_stamina: 30.0,
                    attack: 0.9,
                    stamina: 1.1,
                    armor: 1.0,
                    skill: (name: "Regrowth", stamina_cost: 5.0, effect: Heal(amount: 12.0)),
                ),
            ],
        )"#,
    );

    let registry = ClassLoader::load(&path).unwrap();

    assert_eq!(registry.names(), vec!["Knight", "Druid"]);
    let druid = registry.get("druid").unwrap();
    assert_eq!(druid.skill.effect, SkillEffect::Heal { amount: 12.0 });
}

#[test]
fn class_without_health_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        temp_dir.path(),
        "classes.ron",
        r#"(
            classes: [
                (
                    name: "Ghost",
                    max_health: 0.0,
                    max_stamina: 20.0,
                    attack: 1.0,
                    stamina: 1.0,
                    armor: 1.0,
                    skill: (name: "Wail", stamina_cost: 4.0, effect: Strike(damage: 5.0)),
                ),
            ],
        )"#,
    );

    let err = ClassLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Invalid { .. }), "{err}");
}

fn class_entry(name: &str, max_health: &str, max_stamina: &str) -> String {
    format!(
        r#"(
            name: "{name}",
            max_health: {max_health},
            max_stamina: {max_stamina},
            attack: 1.0,
            stamina: 1.0,
            armor: 1.0,
            skill: (name: "Wail", stamina_cost: 4.0, effect: Strike(damage: 5.0)),
        )"#
    )
}

#[test]
fn class_with_non_finite_maxima_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    for (health, stamina) in [("NaN", "20.0"), ("50.0", "inf"), ("NaN", "inf")] {
        let table = format!("(classes: [{}])", class_entry("Ghost", health, stamina));
        let path = write(temp_dir.path(), "classes.ron", &table);

        let err = ClassLoader::load(&path).unwrap_err();
        assert!(
            matches!(err, CatalogLoadError::Invalid { .. }),
            "{health}/{stamina}: {err}"
        );
    }
}

#[test]
fn duplicate_class_names_are_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let table = format!(
        "(classes: [{}, {}])",
        class_entry("Ghost", "40.0", "20.0"),
        class_entry("GHOST", "60.0", "20.0"),
    );
    let path = write(temp_dir.path(), "classes.ron", &table);

    let err = ClassLoader::load(&path).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Invalid { .. }), "{err}");
    assert!(err.to_string().contains("class `GHOST` is listed twice"), "{err}");
}

#[test]
fn factory_falls_back_to_builtin_content() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "equipment.json", EQUIPMENT_JSON);
    let factory = ContentFactory::new(temp_dir.path());

    let catalog = factory.load_equipment().unwrap();
    assert_eq!(catalog.weapons().len(), 2);

    let classes = factory.load_classes().unwrap();
    assert_eq!(classes.names(), UnitClassRegistry::standard().names());

    assert_eq!(factory.load_config().unwrap(), ArenaConfig::default());
}

#[test]
fn factory_picks_up_optional_files() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "equipment.ron",
        r#"(
            weapons: [(id: 1, name: "stick", min_damage: 1.0, max_damage: 2.8, stamina_per_hit: 1.0)],
            armors: [(id: 1, name: "t-shirt", defence: 0.5, stamina_per_turn: 0.1)],
        )"#,
    );
    write(
        temp_dir.path(),
        "arena.toml",
        "enemy_skill_chance = 25\nscale_regen_by_class = true\n",
    );
    let factory = ContentFactory::new(temp_dir.path());

    assert_eq!(factory.load_equipment().unwrap().weapon_names(), vec!["stick"]);

    let config = factory.load_config().unwrap();
    assert_eq!(config.enemy_skill_chance, 25);
    assert!(config.scale_regen_by_class);
    assert_eq!(config.stamina_per_round, ArenaConfig::DEFAULT_STAMINA_PER_ROUND);
}

#[test]
fn factory_without_equipment_reports_json_path() {
    let temp_dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(temp_dir.path());

    match factory.load_equipment().unwrap_err() {
        CatalogLoadError::Io { path, .. } => {
            assert_eq!(path, temp_dir.path().join("equipment.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn shipped_data_directory_loads() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    let factory = ContentFactory::new(data_dir);

    let catalog = factory.load_equipment().unwrap();
    assert!(catalog.weapon("hatchet").is_some());
    assert!(catalog.armor("t-shirt").is_some());

    let classes = factory.load_classes().unwrap();
    assert_eq!(classes.names(), UnitClassRegistry::standard().names());
    for name in classes.names() {
        assert_eq!(classes.get(&name), UnitClassRegistry::standard().get(&name));
    }

    assert_eq!(factory.load_config().unwrap(), ArenaConfig::default());
}
