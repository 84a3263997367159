use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::CoreError;

use super::slot::SlotStore;

/// Records addressable by a stable unique id.
pub trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for crate::models::holding::Holding {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for crate::models::ledger::LedgerEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for crate::models::trade::Trade {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Typed view over one durable slot.
///
/// Loading fails open: an empty or unparsable slot yields the seed value,
/// which is immediately persisted. Every save serializes the whole value —
/// a burst of N mutations produces N full writes, which is acceptable at
/// this record-count scale.
///
/// Date fields are (de)serialized through serde in one place here, so no
/// caller ever re-hydrates string-encoded dates by hand.
pub struct Repository<T> {
    store: Arc<dyn SlotStore>,
    key: String,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn SlotStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: std::marker::PhantomData,
        }
    }

    /// The slot key this repository owns.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the slot contents, falling back to `seed` when the slot is
    /// empty or its payload cannot be parsed. The fallback is persisted
    /// before returning, so a later load sees the same data.
    pub fn load_or_seed(&self, seed: impl FnOnce() -> T) -> Result<T, CoreError> {
        match self.store.read(&self.key)? {
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!(
                        slot = %self.key,
                        error = %e,
                        "unparsable slot payload — reseeding with defaults"
                    );
                    let value = seed();
                    self.save(&value)?;
                    Ok(value)
                }
            },
            None => {
                let value = seed();
                self.save(&value)?;
                Ok(value)
            }
        }
    }

    /// Serialize and write the full value to the slot.
    pub fn save(&self, value: &T) -> Result<(), CoreError> {
        let payload = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("slot '{}': {e}", self.key)))?;
        self.store.write(&self.key, &payload)
    }
}

impl<R> Repository<Vec<R>>
where
    R: Serialize + DeserializeOwned + Identified,
{
    /// Append a record and write the collection through to the slot.
    pub fn append(&self, collection: &mut Vec<R>, record: R) -> Result<(), CoreError> {
        collection.push(record);
        self.save(collection)
    }

    /// Remove a record by id and write through. Returns the removed record.
    pub fn remove(&self, collection: &mut Vec<R>, id: Uuid) -> Result<R, CoreError> {
        let idx = collection
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        let removed = collection.remove(idx);
        self.save(collection)?;
        Ok(removed)
    }

    /// Replace a record in place (matched by id) and write through.
    pub fn replace(&self, collection: &mut Vec<R>, record: R) -> Result<(), CoreError> {
        let idx = collection
            .iter()
            .position(|r| r.id() == record.id())
            .ok_or_else(|| CoreError::RecordNotFound(record.id().to_string()))?;
        collection[idx] = record;
        self.save(collection)
    }
}
