// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::{FinanceError, Result};
use crate::models::{Summary, Transaction, TxKind};

pub fn total_for(txs: &[Transaction], kind: TxKind) -> Result<Decimal> {
    txs.iter()
        .filter(|t| t.kind == kind)
        .try_fold(Decimal::ZERO, |acc, t| {
            acc.checked_add(t.amount).ok_or_else(|| {
                FinanceError::Overflow(format!("{} total exceeds the representable range", kind))
            })
        })
}

pub fn summarize(txs: &[Transaction]) -> Result<Summary> {
    let total_income = total_for(txs, TxKind::Income)?;
    let total_expense = total_for(txs, TxKind::Expense)?;
    let net_profit = total_income.checked_sub(total_expense).ok_or_else(|| {
        FinanceError::Overflow("net profit exceeds the representable range".into())
    })?;
    Ok(Summary {
        total_income,
        total_expense,
        net_profit,
    })
}
