// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the ledger and its stores.
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Input rejected at the boundary; nothing was recorded.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A stored row could not be read back into a transaction.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// A total or projection no longer fits in a `Decimal`.
    #[error("Amount overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;
