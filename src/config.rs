// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{FinanceError, Result};

pub const KEY_THRESHOLD: &str = "threshold";
pub const KEY_WARNING_RATIO: &str = "warning_ratio";
pub const KEY_PROJECTION_MULTIPLIER: &str = "projection_multiplier";
pub const KEY_SCALING_FLOOR: &str = "scaling_floor";
pub const KEY_CURRENCY: &str = "currency";

pub const KEYS: [&str; 5] = [
    KEY_THRESHOLD,
    KEY_WARNING_RATIO,
    KEY_PROJECTION_MULTIPLIER,
    KEY_SCALING_FLOOR,
    KEY_CURRENCY,
];

/// Tunables of the estimator and alert generator.
///
/// `projection_multiplier` and `scaling_floor` drive a placeholder
/// extrapolation with no calendar basis; keep the defaults unless the
/// projection model is replaced outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineConfig {
    /// Formalization limit the alerts are measured against.
    pub threshold: Decimal,
    /// Fraction of `threshold` at which the warning tier starts.
    pub warning_ratio: Decimal,
    pub projection_multiplier: Decimal,
    /// Raw income totals at or below this are reported unscaled.
    pub scaling_floor: Decimal,
    /// Display label only; amounts are never converted.
    pub currency: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: Decimal::from(50_000_000),
            warning_ratio: Decimal::new(5, 1),
            projection_multiplier: Decimal::from(40),
            scaling_floor: Decimal::from(1000),
            currency: "COP".to_string(),
        }
    }
}

impl EngineConfig {
    /// Reads overrides from the `settings` table, keeping defaults for
    /// missing keys.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut cfg = Self::default();
        for key in KEYS {
            if let Some(v) = get_setting(conn, key)? {
                cfg.apply(key, &v)
                    .map_err(|e| FinanceError::Corrupt(format!("settings.{}: {}", key, e)))?;
            }
        }
        Ok(cfg)
    }

    /// Sets one key from its textual form.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            KEY_THRESHOLD => self.threshold = parse_positive(key, value)?,
            KEY_WARNING_RATIO => {
                let r = parse_positive(key, value)?;
                if r > Decimal::ONE {
                    return Err(FinanceError::Validation(format!(
                        "{} must be between 0 and 1, got {}",
                        key, r
                    )));
                }
                self.warning_ratio = r;
            }
            KEY_PROJECTION_MULTIPLIER => self.projection_multiplier = parse_positive(key, value)?,
            KEY_SCALING_FLOOR => self.scaling_floor = parse_non_negative(key, value)?,
            KEY_CURRENCY => {
                if value.is_empty() {
                    return Err(FinanceError::Validation("currency cannot be empty".into()));
                }
                self.currency = value.to_uppercase();
            }
            other => {
                return Err(FinanceError::Validation(format!(
                    "Unknown setting '{}' (use one of: {})",
                    other,
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Validates `value` for `key` and persists it.
    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<Self> {
        let mut cfg = Self::load(conn)?;
        cfg.apply(key, value)?;
        let stored = match key {
            KEY_CURRENCY => cfg.currency.clone(),
            _ => value.trim().to_string(),
        };
        conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, stored],
        )?;
        Ok(cfg)
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_THRESHOLD, self.threshold.to_string()),
            (KEY_WARNING_RATIO, self.warning_ratio.to_string()),
            (KEY_PROJECTION_MULTIPLIER, self.projection_multiplier.to_string()),
            (KEY_SCALING_FLOOR, self.scaling_floor.to_string()),
            (KEY_CURRENCY, self.currency.clone()),
        ]
    }
}

fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn parse_non_negative(key: &str, value: &str) -> Result<Decimal> {
    let d = value
        .parse::<Decimal>()
        .map_err(|_| FinanceError::Validation(format!("Invalid decimal '{}' for {}", value, key)))?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(FinanceError::Validation(format!(
            "{} cannot be negative, got {}",
            key, d
        )));
    }
    Ok(d)
}

fn parse_positive(key: &str, value: &str) -> Result<Decimal> {
    let d = parse_non_negative(key, value)?;
    if d.is_zero() {
        return Err(FinanceError::Validation(format!("{} must be positive", key)));
    }
    Ok(d)
}
