// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod summary;
pub mod alerts;
pub mod report;
pub mod exporter;
pub mod session;
pub mod settings;

use anyhow::Result;
use rusqlite::Connection;

use crate::config::EngineConfig;
use crate::db::SqliteStore;
use crate::ledger::Ledger;

/// A ledger over `conn`, configured from its `settings` table.
pub fn open_ledger(conn: &Connection) -> Result<Ledger<SqliteStore<'_>>> {
    let cfg = EngineConfig::load(conn)?;
    Ok(Ledger::with_config(SqliteStore::new(conn), cfg))
}
