// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-user transaction ledger over an injected [`TransactionStore`].
//!
//! Every operation that can seed a fresh user takes `&mut self`, so a single
//! ledger never interleaves an append with a read for the same user.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::alerts::generate_alerts;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::estimator;
use crate::models::{Alert, Summary, Transaction, TxKind};
use crate::store::TransactionStore;
use crate::summary;

/// Sample records written the first time a user is seen.
pub const SEED_RECORDS: [(TxKind, &str, i64); 2] = [
    (TxKind::Income, "Weekly sales", 750_000),
    (TxKind::Expense, "Merchandise purchase", 300_000),
];

pub struct Ledger<S> {
    store: S,
    config: EngineConfig,
}

impl<S: TransactionStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seeds the user's set if the store has none. No-op afterwards.
    pub fn ensure_initialized(&mut self, user_id: &str) -> Result<()> {
        if self.store.load(user_id)?.is_some() {
            return Ok(());
        }
        let now = Utc::now();
        let seed: Vec<Transaction> = SEED_RECORDS
            .iter()
            .enumerate()
            .map(|(i, (kind, description, amount))| Transaction {
                id: i as i64 + 1,
                kind: *kind,
                description: description.to_string(),
                amount: Decimal::from(*amount),
                occurred_at: now,
            })
            .collect();
        self.store.save(user_id, &seed)?;
        debug!(user_id, records = seed.len(), "seeded transaction set");
        Ok(())
    }

    /// Stored set in insertion order. Never writes; an unknown user reads
    /// as empty.
    pub fn read(&self, user_id: &str) -> Result<Vec<Transaction>> {
        Ok(self.store.load(user_id)?.unwrap_or_default())
    }

    pub fn get_or_init(&mut self, user_id: &str) -> Result<Vec<Transaction>> {
        self.ensure_initialized(user_id)?;
        self.read(user_id)
    }

    /// Records a new transaction stamped with the current time.
    ///
    /// Amount sign and description content are the caller's to check.
    pub fn append(
        &mut self,
        user_id: &str,
        kind: TxKind,
        description: &str,
        amount: Decimal,
    ) -> Result<Transaction> {
        let mut set = self.get_or_init(user_id)?;
        let id = set.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let tx = Transaction {
            id,
            kind,
            description: description.to_string(),
            amount,
            occurred_at: Utc::now(),
        };
        set.push(tx.clone());
        self.store.save(user_id, &set)?;
        debug!(user_id, id, kind = %kind, %amount, "appended transaction");
        Ok(tx)
    }

    /// Transactions of one kind, most recent first.
    pub fn list(&mut self, user_id: &str, kind: TxKind) -> Result<Vec<Transaction>> {
        let mut out: Vec<Transaction> = self
            .get_or_init(user_id)?
            .into_iter()
            .filter(|t| t.kind == kind)
            .collect();
        out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at).then(b.id.cmp(&a.id)));
        Ok(out)
    }

    pub fn summarize(&mut self, user_id: &str) -> Result<Summary> {
        summary::summarize(&self.get_or_init(user_id)?)
    }

    pub fn estimate_annual_income(&mut self, user_id: &str) -> Result<Decimal> {
        estimator::estimate_annual_income(&self.get_or_init(user_id)?, &self.config)
    }

    /// Estimate followed by alert generation, as the alerts page shows them.
    pub fn alerts(&mut self, user_id: &str) -> Result<(Decimal, Vec<Alert>)> {
        let estimate = self.estimate_annual_income(user_id)?;
        Ok((estimate, generate_alerts(estimate, &self.config)))
    }

    /// Ends the user's session, discarding their set.
    pub fn end_session(&mut self, user_id: &str) -> Result<bool> {
        let existed = self.store.remove(user_id)?;
        info!(user_id, existed, "session ended");
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::store::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::new(MemoryStore::new())
    }

    #[test]
    fn read_does_not_seed() {
        let mut l = ledger();
        assert!(l.read("u").unwrap().is_empty());
        l.ensure_initialized("u").unwrap();
        assert_eq!(l.read("u").unwrap().len(), 2);
    }

    #[test]
    fn get_or_init_is_idempotent() {
        let mut l = ledger();
        let first = l.get_or_init("u").unwrap();
        let second = l.get_or_init("u").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].kind, TxKind::Income);
        assert_eq!(first[1].kind, TxKind::Expense);
    }

    #[test]
    fn appends_get_increasing_ids() {
        let mut l = ledger();
        for i in 0..5 {
            l.append("u", TxKind::Expense, "rent", Decimal::from(i)).unwrap();
        }
        let set = l.read("u").unwrap();
        assert_eq!(set.len(), 7);
        assert!(set.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(set.last().unwrap().id, 7);
    }

    #[test]
    fn users_are_isolated() {
        let mut l = ledger();
        l.append("a", TxKind::Income, "gig", Decimal::from(10)).unwrap();
        assert_eq!(l.read("a").unwrap().len(), 3);
        assert_eq!(l.get_or_init("b").unwrap().len(), 2);
    }

    #[test]
    fn fresh_user_scenario() {
        let mut l = ledger();
        let s = l.summarize("u").unwrap();
        assert_eq!(s.total_income, Decimal::from(750_000));
        assert_eq!(s.total_expense, Decimal::from(300_000));
        assert_eq!(s.net_profit, Decimal::from(450_000));

        let (estimate, alerts) = l.alerts("u").unwrap();
        assert_eq!(estimate, Decimal::from(30_000_000));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Warning);
    }

    #[test]
    fn end_session_reseeds_on_next_access() {
        let mut l = ledger();
        l.append("u", TxKind::Income, "extra", Decimal::from(5)).unwrap();
        assert!(l.end_session("u").unwrap());
        assert!(!l.end_session("u").unwrap());
        assert_eq!(l.get_or_init("u").unwrap().len(), 2);
    }
}
