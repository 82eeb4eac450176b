use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::domain::model::Override;
use crate::domain::ports::OverrideStore;
use crate::utils::error::Result;

/// File-backed override store, same on-disk shape as a hand-maintained
/// `data.json`: `{ "YYYY-MM-DD": [start, end] }` with nullable bounds.
///
/// Every read-modify-write runs under one mutex; without it two concurrent
/// administrative edits could load the same snapshot and the second save
/// would drop the first edit.
pub struct JsonOverrideStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonOverrideStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> BTreeMap<String, Override> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(
                    "override file {} not readable ({}), starting empty",
                    self.path.display(),
                    e
                );
                return BTreeMap::new();
            }
        };

        let values: BTreeMap<String, Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                debug!(
                    "override file {} unparseable ({}), starting empty",
                    self.path.display(),
                    e
                );
                return BTreeMap::new();
            }
        };

        values
            .iter()
            .map(|(date, value)| (date.clone(), Override::from_value(value)))
            .collect()
    }

    fn write_map(&self, map: &BTreeMap<String, Override>) -> Result<()> {
        let values: BTreeMap<&String, Value> = map
            .iter()
            .filter_map(|(date, entry)| entry.to_value().map(|value| (date, value)))
            .collect();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

impl OverrideStore for JsonOverrideStore {
    fn load(&self) -> BTreeMap<String, Override> {
        let _guard = self.lock.lock();
        self.read_map()
    }

    fn set(&self, date: &str, entry: Override) -> Result<()> {
        let _guard = self.lock.lock();
        let mut map = self.read_map();
        map.insert(date.to_string(), entry);
        self.write_map(&map)
    }

    fn remove(&self, date: &str) -> Result<bool> {
        let _guard = self.lock.lock();
        let mut map = self.read_map();
        let removed = map.remove(date).is_some();
        if removed {
            self.write_map(&map)?;
        }
        Ok(removed)
    }
}
