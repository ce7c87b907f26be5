// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::error::{FinanceError, Result};
use crate::models::{Transaction, TxKind};
use crate::summary::total_for;

/// Projects a yearly income figure from the recorded income.
///
/// Totals above `scaling_floor` are multiplied by `projection_multiplier`;
/// anything at or below it is returned as-is. This is not a calendar-based
/// annualization.
pub fn estimate_annual_income(txs: &[Transaction], cfg: &EngineConfig) -> Result<Decimal> {
    project(total_for(txs, TxKind::Income)?, cfg)
}

pub fn project(raw_total: Decimal, cfg: &EngineConfig) -> Result<Decimal> {
    if raw_total <= cfg.scaling_floor {
        return Ok(raw_total);
    }
    raw_total
        .checked_mul(cfg.projection_multiplier)
        .ok_or_else(|| {
            FinanceError::Overflow(format!(
                "projecting {} x {} exceeds the representable range",
                raw_total, cfg.projection_multiplier
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_above_floor() {
        let cfg = EngineConfig::default();
        assert_eq!(
            project(Decimal::from(750_000), &cfg).unwrap(),
            Decimal::from(30_000_000)
        );
        assert_eq!(project(Decimal::from(1001), &cfg).unwrap(), Decimal::from(40_040));
    }

    #[test]
    fn floor_itself_is_unscaled() {
        let cfg = EngineConfig::default();
        assert_eq!(project(Decimal::from(500), &cfg).unwrap(), Decimal::from(500));
        assert_eq!(project(Decimal::from(1000), &cfg).unwrap(), Decimal::from(1000));
        assert_eq!(project(Decimal::ZERO, &cfg).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn projection_overflow_is_an_error() {
        let cfg = EngineConfig::default();
        let raw: Decimal = "2000000000000000000000000000".parse().unwrap();
        assert!(matches!(project(raw, &cfg), Err(FinanceError::Overflow(_))));
    }
}
