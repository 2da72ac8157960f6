//! Mock wallet account kept in a host-provided key/value store.
//!
//! There is no real authentication here: the store holds a single account as plain JSON,
//! the way a browser keeps it in local storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Storage capability owned by the host application.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

#[derive(Serialize, Deserialize)]
struct StoredAccount {
    #[serde(rename = "walletId")]
    wallet_id: String,

    password: String,
}

pub struct Accounts<S> {
    store: S,
}

impl<S: KeyValueStore> Accounts<S> {
    pub const KEY: &'static str = "helios_user";

    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Store the account, replacing any previous one, and sign in.
    pub fn register(&mut self, wallet_id: &str, password: &str) -> Result<String> {
        ensure!(!wallet_id.is_empty() && !password.is_empty(), "all fields are required");
        let account =
            StoredAccount { wallet_id: wallet_id.to_string(), password: password.to_string() };
        self.store.set(Self::KEY, serde_json::to_string(&account)?);
        info!(wallet_id, "registered");
        Ok(account.wallet_id)
    }

    /// Sign in with the stored account.
    ///
    /// The wallet ID is matched case-insensitively, and the stored spelling is returned.
    pub fn login(&self, wallet_id: &str, password: &str) -> Result<String> {
        let account = self.stored()?.context("user not found, try registering")?;
        ensure!(
            account.wallet_id.to_lowercase() == wallet_id.to_lowercase()
                && account.password == password,
            "user not found, try registering",
        );
        info!(wallet_id = %account.wallet_id, "signed in");
        Ok(account.wallet_id)
    }

    /// Resume the session on startup. A corrupted entry is dropped.
    pub fn restore(&mut self) -> Option<String> {
        match self.stored() {
            Ok(account) => account.map(|account| account.wallet_id).filter(|id| !id.is_empty()),
            Err(error) => {
                warn!("dropping the stored account: {error:#}");
                self.store.remove(Self::KEY);
                None
            }
        }
    }

    pub fn logout(&mut self) {
        self.store.remove(Self::KEY);
    }

    fn stored(&self) -> Result<Option<StoredAccount>> {
        self.store
            .get(Self::KEY)
            .map(|json| {
                serde_json::from_str(&json).context("failed to deserialize the stored account")
            })
            .transpose()
    }
}
