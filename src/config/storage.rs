use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::config::{
    error::ConfigError,
    profile::{FlashFillConfig, STORAGE_KEY},
};

/// String key/value storage holding serialized configuration blobs.
pub trait ConfigStore {
    /// `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError>;

    fn write(&mut self, key: &str, blob: &str) -> Result<(), ConfigError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl ConfigStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.dir).map_err(|source| ConfigError::Io {
            path: self.dir.display().to_string(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, blob).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, blob: &str) -> Self {
        self.entries.insert(key.to_string(), blob.to_string());
        self
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), ConfigError> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Load the stored configuration. Anything unusable yields the default config.
pub fn load_config(store: &dyn ConfigStore) -> FlashFillConfig {
    let blob = match store.read(STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return FlashFillConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored config, using defaults");
            return FlashFillConfig::default();
        }
    };

    match serde_json::from_str::<FlashFillConfig>(&blob) {
        Ok(config) if !config.profiles.is_empty() => config,
        Ok(_) => {
            tracing::warn!("stored config has no profiles, using defaults");
            FlashFillConfig::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored config is corrupt, using defaults");
            FlashFillConfig::default()
        }
    }
}

pub fn save_config(store: &mut dyn ConfigStore, config: &FlashFillConfig) -> Result<(), ConfigError> {
    let blob = serde_json::to_string(config).map_err(|source| ConfigError::Json {
        context: "serialize config".into(),
        source,
    })?;
    store.write(STORAGE_KEY, &blob)
}
