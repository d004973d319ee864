//! Persisted view state.
//!
//! Elements never write view data themselves. They hand a [`ViewDataSave`]
//! to a [`ViewDataSender`] and carry on; the [`ViewDataStore`] on the other
//! end of the channel applies pending saves whenever it is pumped.

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    sync::mpsc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The persisted state of a text element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextViewData {
    pub text: String,
}

/// A scheduled write of `data` under `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewDataSave {
    pub key: String,
    pub data: TextViewData,
}

#[derive(Clone, Debug)]
pub struct ViewDataSender(mpsc::Sender<ViewDataSave>);

impl ViewDataSender {
    /// Fire and forget. A store that has gone away simply drops the save.
    pub fn schedule_save(&self, key: &str, data: TextViewData) {
        let save = ViewDataSave {
            key: key.to_owned(),
            data,
        };
        if self.0.send(save).is_err() {
            log::trace!("view data store closed, dropping save for {key:?}");
        }
    }
}

#[derive(Debug)]
pub struct ViewDataStore {
    tx: mpsc::Sender<ViewDataSave>,
    rx: mpsc::Receiver<ViewDataSave>,
    entries: BTreeMap<String, TextViewData>,
}

impl Default for ViewDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewDataStore {
    pub fn new() -> Self {
        Self::with_entries(BTreeMap::new())
    }

    fn with_entries(entries: BTreeMap<String, TextViewData>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, entries }
    }

    pub fn sender(&self) -> ViewDataSender {
        ViewDataSender(self.tx.clone())
    }

    /// Applies every pending save in arrival order. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        for save in self.rx.try_iter() {
            self.entries.insert(save.key, save.data);
            applied += 1;
        }
        if applied > 0 {
            log::debug!("applied {applied} view data saves");
        }
        applied
    }

    pub fn get(&self, key: &str) -> Option<&TextViewData> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialises the applied entries. Pending saves are not included.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(&self.entries).context("serialising view data")
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let entries = serde_json::from_str(json).context("parsing view data")?;
        Ok(Self::with_entries(entries))
    }

    /// Pumps pending saves, then writes a snapshot to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        self.pump();
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("writing view data to {}", path.display()))
    }

    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading view data from {}", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(text: &str) -> TextViewData {
        TextViewData {
            text: text.to_owned(),
        }
    }

    #[test]
    fn saves_wait_for_pump() {
        let mut store = ViewDataStore::new();
        let sender = store.sender();
        sender.schedule_save("title", data("a"));

        assert!(store.is_empty());
        assert!(store.get("title").is_none());
        assert_eq!(store.pump(), 1);
        assert_eq!(store.get("title"), Some(&data("a")));
        assert!(!store.is_empty());
        assert_eq!(store.pump(), 0);
    }

    #[test]
    fn last_save_for_a_key_wins() {
        let mut store = ViewDataStore::new();
        let sender = store.sender();
        sender.schedule_save("title", data("a"));
        sender.schedule_save("title", data("b"));
        sender.schedule_save("other", data("c"));

        assert_eq!(store.pump(), 3);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("title"), Some(&data("b")));
    }

    #[test]
    fn sending_to_a_dropped_store_is_silent() {
        let sender = ViewDataStore::new().sender();
        sender.schedule_save("title", data("a"));
    }

    #[test]
    fn json_snapshot_restores_entries() {
        let mut store = ViewDataStore::new();
        store.sender().schedule_save("title", data("Hello"));
        store.pump();

        let restored = ViewDataStore::from_json(&store.to_json().unwrap()).unwrap();
        assert_eq!(restored.get("title"), Some(&data("Hello")));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ViewDataStore::from_json("{ nope").unwrap_err();
        assert!(format!("{err:#}").contains("parsing view data"));
    }
}
