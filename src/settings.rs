//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/arcade-blocks/settings.toml (or platform equivalent)

use crate::clear::ClearTiming;
use crate::game::EngineConfig;
use crate::score::GravityCurve;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors from writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keybindings
    pub keys: KeyBindings,
    /// Visual settings
    pub visual: VisualSettings,
    /// Gameplay settings
    pub gameplay: GameplaySettings,
    /// Audio settings
    pub audio: AudioSettings,
}

/// Key bindings (stored as strings for easy editing)
/// Each command can have one or more keys bound to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_left: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_right: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub soft_drop: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub rotate_cw: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub reset: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub exit_to_menu: Vec<String>,
}

/// Deserialize keys as either a single string or array of strings
fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeysVisitor;

    impl<'de> Visitor<'de> for KeysVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a key name or a list of key names")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut keys = Vec::new();
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    deserializer.deserialize_any(KeysVisitor)
}

/// Serialize keys: single key as string, multiple as array
fn serialize_keys<S>(keys: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    if let [key] = keys {
        serializer.serialize_str(key)
    } else {
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

/// Visual settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Block style: "solid", "bracket", "round"
    pub block_style: String,
}

/// Gameplay timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    /// Gravity interval at level 1
    pub base_gravity_ms: u64,
    /// Fastest gravity interval
    pub min_gravity_ms: u64,
    /// Gravity speed-up per level
    pub gravity_step_ms: u64,
    /// How long full rows flash before they are removed
    pub clear_flash_ms: u64,
    /// Flash color switch period
    pub flash_period_ms: u64,
    /// Fixed piece sequence seed
    pub seed: Option<u64>,
}

/// Audio settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// SFX volume (0-100)
    pub sfx_volume: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string()],
            move_right: vec!["Right".to_string()],
            soft_drop: vec!["Down".to_string()],
            rotate_cw: vec!["Up".to_string()],
            reset: vec!["Space".to_string()],
            exit_to_menu: vec!["Esc".to_string()],
        }
    }
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            block_style: "solid".to_string(),
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            base_gravity_ms: 500,
            min_gravity_ms: 100,
            gravity_step_ms: 50,
            clear_flash_ms: 200,
            flash_period_ms: 100,
            seed: None,
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { sfx_volume: 50 }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "arcade-blocks", "arcade-blocks")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or fall back to defaults.
    /// A missing file is created with the defaults so it can be edited.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    tracing::warn!("could not write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings text, falling back to defaults if it is malformed
    pub fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed settings: {}", e);
            Self::default()
        })
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), SettingsError> {
        let dir = Self::config_dir().ok_or(SettingsError::NoConfigDir)?;
        fs::create_dir_all(&dir)?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(dir.join("settings.toml"), contents)?;
        Ok(())
    }

    /// Engine tuning derived from the gameplay section
    pub fn engine_config(&self) -> EngineConfig {
        let g = &self.gameplay;
        EngineConfig {
            gravity: GravityCurve {
                base: Duration::from_millis(g.base_gravity_ms),
                min: Duration::from_millis(g.min_gravity_ms),
                step: Duration::from_millis(g.gravity_step_ms),
            },
            clear: ClearTiming {
                duration: Duration::from_millis(g.clear_flash_ms),
                flash_period: Duration::from_millis(g.flash_period_ms),
            },
            seed: g.seed,
        }
    }
}

impl VisualSettings {
    /// Get the block characters based on style
    pub fn block_chars(&self) -> &'static str {
        match self.block_style.as_str() {
            "bracket" => "[]",
            "round" => "()",
            _ => "██", // "solid" or default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = Settings::parse(
            r#"
            [gameplay]
            base_gravity_ms = 800
            seed = 99

            [keys]
            rotate_cw = ["Up", "x"]
            reset = "r"
            "#,
        );
        assert_eq!(settings.gameplay.base_gravity_ms, 800);
        assert_eq!(settings.gameplay.min_gravity_ms, 100);
        assert_eq!(settings.gameplay.seed, Some(99));
        assert_eq!(settings.keys.rotate_cw, vec!["Up", "x"]);
        assert_eq!(settings.keys.reset, vec!["r"]);
        assert_eq!(settings.keys.move_left, vec!["Left"]);

        let config = settings.engine_config();
        assert_eq!(config.gravity.base, Duration::from_millis(800));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let settings = Settings::parse("this is [not toml");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_toml_round_trip_keeps_single_keys_flat() {
        let text = toml::to_string_pretty(&Settings::default()).unwrap();
        assert!(text.contains("move_left = \"Left\""));
        assert_eq!(Settings::parse(&text), Settings::default());
    }

    #[test]
    fn test_block_chars() {
        let mut visual = VisualSettings::default();
        assert_eq!(visual.block_chars(), "██");
        visual.block_style = "bracket".to_string();
        assert_eq!(visual.block_chars(), "[]");
    }
}
