//! Key-value persistence for small pieces of UI state.
//!
//! Backends move raw JSON strings and may fail. [`FlagStore`] sits on top,
//! decodes typed values and never lets a backend failure reach the caller:
//! reads fall back to the supplied default and failed writes are logged.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed stored value: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw storage of JSON-encoded values by key.
pub trait StorageBackend {
    /// Raw value under `key`, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Fails with a [`StoreError`] when the storage can not be reached or
    /// holds data that is not valid JSON.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Fails with a [`StoreError`] when the storage can not be reached or
    /// the existing contents can not be rewritten.
    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &mut B {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Typed get-with-default / set over a [`StorageBackend`].
#[derive(Debug, Clone, Default)]
pub struct FlagStore<B> {
    backend: B,
}

impl<B: StorageBackend> FlagStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Last value stored under `key`, or `default` if there is none or it
    /// can not be read.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(err) => {
                warn!("reading {key:?} failed, using default: {err}");
                default
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            warn!("persisting {key:?} failed: {err}");
        }
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn try_set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, raw)
    }
}

/// A value mirrored to a [`FlagStore`] key on every write.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<T> {
    key: &'static str,
    value: T,
}

pub type PersistentFlag = Persisted<bool>;

impl<T: Serialize + DeserializeOwned> Persisted<T> {
    pub fn load<B: StorageBackend>(store: &FlagStore<B>, key: &'static str, default: T) -> Self {
        let value = store.get(key, default);
        Self { key, value }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set<B: StorageBackend>(&mut self, store: &mut FlagStore<B>, value: T) {
        self.value = value;
        store.set(self.key, &self.value);
    }
}

impl Persisted<bool> {
    /// Flips the flag, persists it and returns the new value.
    pub fn toggle<B: StorageBackend>(&mut self, store: &mut FlagStore<B>) -> bool {
        let next = !self.value;
        self.set(store, next);
        debug!("{} -> {next}", self.key);
        next
    }
}

/// In-process backend. Clones share the same map, so a clone handed to a
/// fresh [`FlagStore`] behaves like storage that survived a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    map: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every read and write fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, raw: impl Into<String>) {
        self.map.borrow_mut().insert(key.to_owned(), raw.into());
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable);
        }
        Ok(self.raw(key))
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.unavailable.get() {
            return Err(StoreError::Unavailable);
        }
        self.map.borrow_mut().insert(key.to_owned(), value);
        Ok(())
    }
}

/// All keys in one JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/<app>/tweaks.json`
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] if the platform has no config directory.
    pub fn in_config_dir(app: &str) -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::Unavailable)?;
        Ok(Self::new(dir.join(app).join("tweaks.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, serde_json::Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.get(key).map(ToString::to_string))
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut all = self.load()?;
        all.insert(key.to_owned(), serde_json::from_str(&value)?);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}

/// Keeps values in egui's persisted memory, which eframe saves with the app.
#[derive(Debug, Clone)]
pub struct EguiMemoryBackend {
    ctx: egui::Context,
}

impl EguiMemoryBackend {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }

    fn id(key: &str) -> egui::Id {
        egui::Id::new(("graph_tweaks", key))
    }
}

impl StorageBackend for EguiMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .ctx
            .data_mut(|d| d.get_persisted::<String>(Self::id(key))))
    }

    fn write(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.ctx
            .data_mut(|d| d.insert_persisted(Self::id(key), value));
        Ok(())
    }
}
