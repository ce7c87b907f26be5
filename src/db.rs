// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, Result};
use crate::models::{Transaction, TxKind};
use crate::store::TransactionStore;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Formalize", "formalize"));

pub fn db_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("formalize.sqlite"))
}

pub fn open_at(path: &Path) -> anyhow::Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- one row per live user session; its transactions go with it
    CREATE TABLE IF NOT EXISTS sessions(
        user_id TEXT PRIMARY KEY,
        started_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS transactions(
        user_id TEXT NOT NULL,
        id INTEGER NOT NULL,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense')),
        description TEXT NOT NULL,
        amount TEXT NOT NULL,
        occurred_at TEXT NOT NULL,
        PRIMARY KEY(user_id, id),
        FOREIGN KEY(user_id) REFERENCES sessions(user_id) ON DELETE CASCADE
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_occurred ON transactions(user_id, occurred_at);
    "#,
    )?;
    Ok(())
}

/// Transaction sets kept in SQLite, one session row per user.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl TransactionStore for SqliteStore<'_> {
    fn load(&self, user_id: &str) -> Result<Option<Vec<Transaction>>> {
        let live: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM sessions WHERE user_id=?1",
                params![user_id],
                |r| r.get(0),
            )
            .optional()?;
        if live.is_none() {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT id, kind, description, amount, occurred_at
             FROM transactions WHERE user_id=?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![user_id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, DateTime<Utc>>(4)?,
            ))
        })?;

        let mut set = Vec::new();
        for row in rows {
            let (id, kind, description, amount, occurred_at) = row?;
            let kind = kind.parse::<TxKind>().map_err(|_| {
                FinanceError::Corrupt(format!("transaction {} has kind '{}'", id, kind))
            })?;
            let amount = amount.parse::<Decimal>().map_err(|_| {
                FinanceError::Corrupt(format!("transaction {} has amount '{}'", id, amount))
            })?;
            set.push(Transaction {
                id,
                kind,
                description,
                amount,
                occurred_at,
            });
        }
        Ok(Some(set))
    }

    fn save(&mut self, user_id: &str, set: &[Transaction]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT OR IGNORE INTO sessions(user_id) VALUES (?1)",
            params![user_id],
        )?;
        tx.execute("DELETE FROM transactions WHERE user_id=?1", params![user_id])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO transactions(user_id, id, kind, description, amount, occurred_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for t in set {
                stmt.execute(params![
                    user_id,
                    t.id,
                    t.kind.as_str(),
                    t.description,
                    t.amount.to_string(),
                    t.occurred_at
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn remove(&mut self, user_id: &str) -> Result<bool> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM transactions WHERE user_id=?1", params![user_id])?;
        let n = tx.execute("DELETE FROM sessions WHERE user_id=?1", params![user_id])?;
        tx.commit()?;
        Ok(n > 0)
    }
}
