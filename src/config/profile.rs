use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{error::ConfigError, overrides::OverrideMap};

/// Key the whole configuration blob is stored under.
pub const STORAGE_KEY: &str = "flash_fill_config";

pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// A named set of override values. `data` keeps its JSON declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Profile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: Map::new(),
        }
    }

    pub fn overrides(&self) -> OverrideMap {
        OverrideMap::from_json_object(&self.data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashFillConfig {
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub active_profile_index: usize,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FlashFillConfig {
    fn default() -> Self {
        Self {
            profiles: vec![Profile::new(DEFAULT_PROFILE_NAME)],
            active_profile_index: 0,
            enabled: true,
        }
    }
}

impl FlashFillConfig {
    /// The selected profile; an out-of-range index falls back to the first one.
    pub fn active_profile(&self) -> Option<&Profile> {
        self.profiles
            .get(self.active_profile_index)
            .or_else(|| self.profiles.first())
    }

    /// Override map of the active profile (empty when there is none).
    pub fn overrides(&self) -> OverrideMap {
        self.active_profile()
            .map(Profile::overrides)
            .unwrap_or_default()
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, ConfigError> {
        self.profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// Append an empty profile and return its index.
    pub fn add_profile(&mut self, name: &str) -> Result<usize, ConfigError> {
        if self.profile(name).is_some() {
            return Err(ConfigError::DuplicateProfile(name.to_string()));
        }
        self.profiles.push(Profile::new(name));
        Ok(self.profiles.len() - 1)
    }

    /// Remove a profile, keeping the active selection on the same profile when it
    /// survives and moving it to the first profile otherwise.
    pub fn remove_profile(&mut self, name: &str) -> Result<Profile, ConfigError> {
        let index = self.position(name)?;
        if self.profiles.len() == 1 {
            return Err(ConfigError::LastProfile);
        }

        let removed = self.profiles.remove(index);
        if self.active_profile_index == index || self.active_profile_index >= self.profiles.len() + 1 {
            self.active_profile_index = 0;
        } else if self.active_profile_index > index {
            self.active_profile_index -= 1;
        }
        Ok(removed)
    }

    pub fn select_profile(&mut self, name: &str) -> Result<(), ConfigError> {
        self.active_profile_index = self.position(name)?;
        Ok(())
    }

    /// Set one override value, replacing an existing entry in place.
    pub fn set_profile_value(&mut self, name: &str, key: &str, value: Value) -> Result<(), ConfigError> {
        let index = self.position(name)?;
        self.profiles[index].data.insert(key.to_string(), value);
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
