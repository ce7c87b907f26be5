// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::error::FinanceError;

pub fn parse_decimal(s: &str) -> std::result::Result<Decimal, FinanceError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| FinanceError::Validation(format!("Invalid amount '{}', expected a number", s)))
}

/// Form-level check for a transaction amount: numeric and not negative.
pub fn parse_amount(s: &str) -> std::result::Result<Decimal, FinanceError> {
    let d = parse_decimal(s)?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(FinanceError::Validation(format!(
            "Invalid amount '{}', must not be negative",
            s
        )));
    }
    Ok(d)
}

pub fn parse_description(s: &str) -> std::result::Result<String, FinanceError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FinanceError::Validation("Description cannot be empty".into()));
    }
    Ok(s.to_string())
}

/// Whole units with thousands separators, e.g. `50,000,000 COP`.
pub fn fmt_grouped(d: &Decimal, ccy: &str) -> String {
    let rounded = d.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {}", sign, grouped, ccy)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
