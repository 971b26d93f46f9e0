//! Keypad profiles loaded from TOML.
//!
//! A profile is a named collection of key definitions, one per grid
//! position. Each definition carries the five configurable fields of a
//! key as plain strings; values are applied through the [`Key`]
//! setters, so an invalid effect or button type in the file logs a
//! warning and leaves the default in place instead of failing the
//! whole profile.
//!
//! # Example TOML
//!
//! ```toml
//! [0]
//! on = "00FF00"
//! off = "001100"
//! command = "ctrl+c"
//! effect = "pulse"
//! button_type = "press"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::KeypadError;
use crate::key::Key;

/// Configuration for a single key position.
///
/// Empty fields keep the fresh-key defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyDef {
    /// Active color as a hex string
    #[serde(default)]
    pub on: String,
    /// Idle color as a hex string
    #[serde(default)]
    pub off: String,
    /// Command string sent on keypress
    #[serde(default)]
    pub command: String,
    /// Animation effect: "pulse", "flash" or "none"
    #[serde(default)]
    pub effect: String,
    /// Activation semantics: "press" or "toggle"
    #[serde(default)]
    pub button_type: String,
}

impl KeyDef {
    /// Build a configured [`Key`] from this definition.
    pub fn build(&self) -> Key {
        let mut key = Key::new();
        if !self.on.is_empty() {
            key.set_on(&self.on);
        }
        if !self.off.is_empty() {
            key.set_off(&self.off);
        }
        if !self.command.is_empty() {
            key.set_command(&self.command);
        }
        if !self.effect.is_empty() {
            key.set_effect(&self.effect);
        }
        if !self.button_type.is_empty() {
            key.set_button_type(&self.button_type);
        }
        key
    }
}

/// A keypad profile — key definitions keyed by grid position label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeypadProfile {
    #[serde(flatten)]
    pub keys: BTreeMap<String, KeyDef>,
}

impl KeypadProfile {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, KeypadError> {
        let content = std::fs::read_to_string(path).map_err(|e| KeypadError::ProfileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, KeypadError> {
        Ok(toml::from_str(content)?)
    }

    /// Get a key definition by position label.
    pub fn get(&self, name: &str) -> Option<&KeyDef> {
        self.keys.get(name)
    }

    /// List all configured position labels.
    pub fn names(&self) -> Vec<&str> {
        self.keys.keys().map(|s| s.as_str()).collect()
    }

    /// Build a configured [`Key`] for every position in the profile.
    pub fn build_keys(&self) -> BTreeMap<String, Key> {
        self.keys
            .iter()
            .map(|(name, def)| (name.clone(), def.build()))
            .collect()
    }
}

/// Default example profile.
pub const DEFAULT_PROFILE_TOML: &str = r#"# Macro keypad profile
# One section per key position. Colors are six-digit hex strings,
# commands use the chord syntax ("ctrl+c"), effect is pulse/flash/none
# and button_type is press/toggle.

[0]
on = "00FF00"
off = "001100"
command = "ctrl+c"
effect = "none"
button_type = "press"

[1]
on = "FF0000"
off = "110000"
command = "ctrl+shift+4"
effect = "pulse"
button_type = "press"

[2]
on = "0000FF"
off = "000011"
command = "cmd+tab"
effect = "none"
button_type = "toggle"

[3]
on = "FFFF00"
off = "111100"
command = "thumbs-up"
effect = "flash"
button_type = "press"
"#;
