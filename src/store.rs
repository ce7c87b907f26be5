// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value storage for transaction sets, keyed on the user id.
//!
//! The ledger never assumes a storage technology: the service layer hands it
//! a store and owns that store's lifecycle. `MemoryStore` backs tests and
//! short-lived sessions; `db::SqliteStore` backs the CLI.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::Transaction;

pub trait TransactionStore {
    /// Returns the stored set, or `None` when the user has no session yet.
    fn load(&self, user_id: &str) -> Result<Option<Vec<Transaction>>>;

    /// Replaces the user's set.
    fn save(&mut self, user_id: &str, set: &[Transaction]) -> Result<()>;

    /// Drops the user's set. Returns whether one existed.
    fn remove(&mut self, user_id: &str) -> Result<bool>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: HashMap<String, Vec<Transaction>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<Vec<Transaction>>> {
        Ok(self.sets.get(user_id).cloned())
    }

    fn save(&mut self, user_id: &str, set: &[Transaction]) -> Result<()> {
        self.sets.insert(user_id.to_string(), set.to_vec());
        Ok(())
    }

    fn remove(&mut self, user_id: &str) -> Result<bool> {
        Ok(self.sets.remove(user_id).is_some())
    }
}
