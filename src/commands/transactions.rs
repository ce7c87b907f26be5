// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::open_ledger;
use crate::db::SqliteStore;
use crate::error::FinanceError;
use crate::estimator::estimate_annual_income;
use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use crate::summary::summarize;
use crate::utils::{maybe_print_json, parse_amount, parse_description, pretty_table};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, user: &str, kind: TxKind, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, user, kind, sub)?;
        }
        Some(("list", sub)) => list(conn, user, kind, sub)?,
        _ => {}
    }
    Ok(())
}

/// Validates the form input, then records it. The entry is not recorded
/// when validation fails.
pub fn add(
    conn: &Connection,
    user: &str,
    kind: TxKind,
    sub: &clap::ArgMatches,
) -> Result<Transaction> {
    let description = parse_description(sub.get_one::<String>("description").unwrap())?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;

    let mut ledger = open_ledger(conn)?;
    check_headroom(&mut ledger, user, kind, amount)?;
    let tx = ledger.append(user, kind, &description, amount)?;
    println!(
        "Recorded {} #{} '{}' for {}",
        kind, tx.id, tx.description, tx.amount
    );
    Ok(tx)
}

/// Rejects an amount that would push the user's totals or income projection
/// past what a `Decimal` can hold.
fn check_headroom(
    ledger: &mut Ledger<SqliteStore<'_>>,
    user: &str,
    kind: TxKind,
    amount: Decimal,
) -> Result<()> {
    let mut set = ledger.get_or_init(user)?;
    set.push(Transaction {
        id: 0,
        kind,
        description: String::new(),
        amount,
        occurred_at: Utc::now(),
    });
    summarize(&set)
        .and_then(|_| estimate_annual_income(&set, ledger.config()))
        .map_err(|_| {
            FinanceError::Validation(format!(
                "Invalid amount '{}', totals would exceed the supported range",
                amount
            ))
        })?;
    Ok(())
}

fn list(conn: &Connection, user: &str, kind: TxKind, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, user, kind, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    t.description.clone(),
                    format!("{:.2}", t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Amount"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(
    conn: &Connection,
    user: &str,
    kind: TxKind,
    sub: &clap::ArgMatches,
) -> Result<Vec<Transaction>> {
    let mut ledger = open_ledger(conn)?;
    let mut data = ledger.list(user, kind)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
