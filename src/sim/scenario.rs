// Scenario files: a container, a shortcut table, initial slots and a
// scripted sequence of ticks, all in TOML.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use slotkeys_core::{Key, Region, PROP_SHORTCUT_PREFIX};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("tick {tick}: unknown key name '{name}'")]
    UnknownKey { tick: usize, name: String },
}

/// Which screen the scenario opens
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContainerKind {
    /// Player inventory only, no extra container
    Player,
    Chest {
        rows: u8,
    },
    Crafting,
    Furnace,
}

/// One pre-placed stack
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SlotEntry {
    pub region: Region,
    pub index: usize,
    pub id: u16,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub damage: i16,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Hover {
    pub region: Region,
    pub index: usize,
}

/// A stack forced onto the cursor before a tick runs
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CursorEntry {
    pub id: u16,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub damage: i16,
}

/// One poll tick: the keys held, where the pointer sits, and optionally
/// a stack placed on the cursor beforehand
#[derive(Debug, Clone, Deserialize)]
pub struct Tick {
    #[serde(default)]
    pub keys: Vec<String>,
    pub hover: Option<Hover>,
    pub cursor: Option<CursorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub container: ContainerKind,
    /// Bare shortcut names, e.g. `allItems = "LSHIFT"`; the `shortcut.`
    /// prefix is added when the table is flattened into properties
    #[serde(default)]
    pub shortcut: HashMap<String, String>,
    #[serde(default, rename = "slot")]
    pub slots: Vec<SlotEntry>,
    #[serde(default, rename = "tick")]
    pub ticks: Vec<Tick>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&text)?;
        // Surface bad key names up front rather than mid-replay
        for (tick, t) in scenario.ticks.iter().enumerate() {
            for name in &t.keys {
                Key::from_str(name).map_err(|_| ScenarioError::UnknownKey {
                    tick: tick + 1,
                    name: name.clone(),
                })?;
            }
        }
        Ok(scenario)
    }

    /// Flatten the shortcut table into the flat properties map the
    /// dispatcher is configured from.
    pub fn properties(&self) -> HashMap<String, String> {
        self.shortcut
            .iter()
            .map(|(name, value)| (format!("{}{}", PROP_SHORTCUT_PREFIX, name), value.clone()))
            .collect()
    }
}

impl Tick {
    pub fn keys(&self) -> Vec<Key> {
        // Validated at load time
        self.keys
            .iter()
            .filter_map(|name| Key::from_str(name).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_scenario() {
        let text = r#"
            container = { kind = "chest", rows = 3 }

            [shortcut]
            allItems = "Q"
            up = "default"

            [[slot]]
            region = "chest"
            index = 0
            id = 4
            count = 64

            [[tick]]
            keys = ["Q"]
            hover = { region = "chest", index = 0 }
        "#;
        let scenario: Scenario = toml::from_str(text).unwrap();
        assert_eq!(scenario.slots.len(), 1);
        assert_eq!(scenario.slots[0].count, 64);
        assert_eq!(scenario.slots[0].damage, 0);
        assert_eq!(scenario.ticks.len(), 1);
        assert_eq!(scenario.ticks[0].keys(), vec![Key::from_str("Q").unwrap()]);

        let props = scenario.properties();
        assert_eq!(props.get("shortcut.allItems").map(String::as_str), Some("Q"));
        assert_eq!(props.get("shortcut.up").map(String::as_str), Some("default"));
    }

    #[test]
    fn test_tick_without_keys_or_hover() {
        let scenario: Scenario =
            toml::from_str("container = { kind = \"player\" }\n[[tick]]\n").unwrap();
        assert!(scenario.ticks[0].keys.is_empty());
        assert!(scenario.ticks[0].hover.is_none());
        assert!(scenario.ticks[0].cursor.is_none());
    }
}
