//! This module provides local key-value persistence for task data
//!
//! The storage layer is deliberately opaque: named slots holding strings, nothing
//! more. [`load_slot`] and [`save_slot`] sit on top of a [`KeyValueStore`] and handle
//! the (de)serialization of whole collections.
//!
//! Failures never propagate past this module: a slot that cannot be read or parsed
//! loads as an empty collection, and a failed write is logged and swallowed (the
//! in-memory data stays the source of truth for the rest of the process lifetime; a
//! failed write only risks being lost on restart).

use std::collections::HashMap;
use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::mock_behaviour::MockBehaviour;

/// An opaque local store of named string slots
pub trait KeyValueStore {
    /// Returns the string stored at `slot`, or `None` if nothing was ever stored there
    fn get(&self, slot: &str) -> Result<Option<String>, Box<dyn Error>>;
    /// Stores `value` at `slot`, replacing any previous content
    fn set(&mut self, slot: &str, value: &str) -> Result<(), Box<dyn Error>>;
}

/// A key-value store backed by one file per slot inside a folder
#[derive(Debug)]
pub struct FileStore {
    folder: PathBuf,
}

impl FileStore {
    /// Create a store over the given folder.
    /// The folder does not have to exist yet, it is created on the first write.
    pub fn new(folder: &Path) -> Self {
        Self { folder: PathBuf::from(folder) }
    }

    /// The file that backs a given slot
    fn file_for(&self, slot: &str) -> PathBuf {
        let mut file_name = sanitize_filename::sanitize(slot);
        file_name.push_str(".json");
        self.folder.join(file_name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, slot: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.file_for(slot);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Unable to read file {:?}: {}", path, err).into()),
        }
    }

    fn set(&mut self, slot: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if let Err(err) = std::fs::create_dir_all(&self.folder) {
            return Err(format!("Unable to create folder {:?}: {}", self.folder, err).into());
        }
        let path = self.file_for(slot);
        if let Err(err) = std::fs::write(&path, value) {
            return Err(format!("Unable to write file {:?}: {}", path, err).into());
        }
        Ok(())
    }
}

/// A key-value store that lives in memory, for tests and demos
///
/// An optional [`MockBehaviour`] makes reads or writes fail on demand, to exercise
/// the degrade-to-empty and swallowed-write paths.
#[derive(Default, Debug)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mock_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            slots: HashMap::new(),
            mock_behaviour: Some(mock_behaviour),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<String>, Box<dyn Error>> {
        if let Some(ref mock) = self.mock_behaviour {
            mock.lock().unwrap().can_get()?;
        }
        Ok(self.slots.get(slot).cloned())
    }

    fn set(&mut self, slot: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if let Some(ref mock) = self.mock_behaviour {
            mock.lock().unwrap().can_set()?;
        }
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// Decode the collection stored at `slot`.
///
/// A missing slot, a failing read and an unparsable blob all degrade to an empty
/// collection. This never returns an error.
pub fn load_slot<S, T>(store: &S, slot: &str) -> Vec<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let content = match store.get(slot) {
        Err(err) => {
            log::warn!("Unable to read slot {:?}: {}. Using an empty collection", slot, err);
            return Vec::new();
        },
        Ok(None) => return Vec::new(),
        Ok(Some(content)) => content,
    };

    match serde_json::from_str(&content) {
        Err(err) => {
            log::warn!("Invalid content in slot {:?}: {}. Using an empty collection", slot, err);
            Vec::new()
        },
        Ok(items) => items,
    }
}

/// Encode `items` and store them at `slot`.
///
/// Failures are logged and swallowed.
pub fn save_slot<S, T>(store: &mut S, slot: &str, items: &[T])
where
    S: KeyValueStore,
    T: Serialize,
{
    let content = match serde_json::to_string(items) {
        Err(err) => {
            log::warn!("Unable to serialize slot {:?}: {}", slot, err);
            return;
        },
        Ok(content) => content,
    };

    if let Err(err) = store.set(slot, &content) {
        log::warn!("Unable to save slot {:?}: {}", slot, err);
    }
}
