use rocket::serde::json::serde_json;
use rocket::serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod store_error;
pub mod requests;

pub use store_error::*;

pub fn default_coins() -> i64 {
    100
}

pub fn default_owned_items() -> Vec<String> {
    vec!["sword".to_owned(), "fireball".to_owned()]
}

/// The single persisted record: the player's coin balance
/// and the identifiers of the items they own.
///
/// Missing fields fall back to the first-run defaults when
/// deserializing, and unknown fields are ignored.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SaveRecord {
    #[serde(default = "default_coins")]
    pub coins: i64,
    #[serde(rename = "ownedItems", default = "default_owned_items")]
    pub owned_items: Vec<String>,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            coins: default_coins(),
            owned_items: default_owned_items(),
        }
    }
}

/// Owns all access to the save file. The file always holds exactly
/// one [`SaveRecord`]; every write replaces it whole.
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// Opens the store, creating the file with the default record
    /// if it does not exist yet.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let store = Self { path };
        if !store.path.exists() {
            store.replace(&SaveRecord::default())?;
        }
        Ok(store)
    }

    /// Reads the current record from disk.
    pub fn load(&self) -> Result<SaveRecord, StoreError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&contents)?;
        Ok(record)
    }

    /// Overwrites the file with `record`. Last write wins.
    pub fn replace(&self, record: &SaveRecord) -> Result<(), StoreError> {
        let contents = serde_json::to_string(record)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
