// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionRecord;
use anyhow::{Context, Result};
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_PREFIX: &str = "@gofinances";

/// String key-value storage, the shape of the on-device store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl KeyValueStore for Connection {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .query_row("SELECT value FROM storage WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read storage key '{}'", key))?;
        Ok(v)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.execute(
            "INSERT INTO storage(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )
        .with_context(|| format!("Write storage key '{}'", key))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.execute("DELETE FROM storage WHERE key=?1", params![key])
            .with_context(|| format!("Remove storage key '{}'", key))?;
        Ok(())
    }
}

pub fn transactions_key(user_id: &str) -> String {
    format!("{}:transactions_user:{}", KEY_PREFIX, user_id)
}

/// Typed access to one user's transaction list.
pub struct TransactionRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> TransactionRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        TransactionRepository { store }
    }

    /// Missing or empty value means the user has not recorded anything yet.
    pub fn load(&self, user_id: &str) -> Result<Vec<TransactionRecord>> {
        let key = transactions_key(user_id);
        let raw = self.store.get_item(&key)?;
        let records: Vec<TransactionRecord> = match raw.as_deref().map(str::trim) {
            None | Some("") | Some("null") => Vec::new(),
            Some(s) => serde_json::from_str(s)
                .with_context(|| format!("Stored transactions under '{}' are not valid", key))?,
        };
        debug!("loaded {} transactions from '{}'", records.len(), key);
        Ok(records)
    }

    pub fn append(&self, user_id: &str, record: TransactionRecord) -> Result<()> {
        let mut records = self.load(user_id)?;
        records.push(record);
        let key = transactions_key(user_id);
        self.store
            .set_item(&key, &serde_json::to_string(&records)?)?;
        debug!("stored {} transactions under '{}'", records.len(), key);
        Ok(())
    }
}
