// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::User;
use crate::store::{KEY_PREFIX, KeyValueStore};
use anyhow::{Context, Result, anyhow};
use log::{debug, info};

pub fn user_storage_key() -> String {
    std::env::var("GOFINANCES_USER_STORAGE_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| format!("{}:user", KEY_PREFIX))
}

/// Who is signed in. Passed explicitly to whatever needs the user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn signed_in(user: User) -> Self {
        Session { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&User> {
        self.user
            .as_ref()
            .ok_or_else(|| anyhow!("Not signed in; run `gofinances auth login` first"))
    }
}

pub struct SessionStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    key: String,
}

impl<'a, S: KeyValueStore + ?Sized> SessionStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_key(store, user_storage_key())
    }

    pub fn with_key(store: &'a S, key: impl Into<String>) -> Self {
        SessionStore {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Result<Session> {
        match self.store.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => {
                let user: User = serde_json::from_str(&raw)
                    .with_context(|| format!("Stored user under '{}' is not valid", self.key))?;
                debug!("restored session for user {}", user.id);
                Ok(Session::signed_in(user))
            }
            _ => Ok(Session::default()),
        }
    }

    pub fn sign_in(&self, user: User) -> Result<Session> {
        self.store
            .set_item(&self.key, &serde_json::to_string(&user)?)?;
        info!("signed in as {} <{}>", user.name, user.email);
        Ok(Session::signed_in(user))
    }

    pub fn sign_out(&self) -> Result<Session> {
        self.store.remove_item(&self.key)?;
        info!("signed out");
        Ok(Session::default())
    }
}
