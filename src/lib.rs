// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod estimator;
pub mod ledger;
pub mod models;
pub mod store;
pub mod summary;
pub mod utils;

pub use error::{FinanceError, Result};
pub use ledger::Ledger;
pub use models::{Alert, Severity, Summary, Transaction, TxKind};
pub use store::{MemoryStore, TransactionStore};
