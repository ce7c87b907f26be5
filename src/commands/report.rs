// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::alerts::generate_alerts;
use crate::commands::open_ledger;
use crate::estimator::estimate_annual_income;
use crate::models::{Alert, Summary, TxKind};
use crate::summary::summarize;
use crate::utils::{fmt_grouped, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct Report {
    pub user_id: String,
    pub currency: String,
    pub income_count: usize,
    pub expense_count: usize,
    pub summary: Summary,
    pub estimated_annual_income: Decimal,
    pub alert: Alert,
}

pub fn handle(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let r = build(conn, user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &r)? {
        let rows = vec![
            vec![
                "Income".into(),
                r.income_count.to_string(),
                format!("{:.2}", r.summary.total_income),
            ],
            vec![
                "Expenses".into(),
                r.expense_count.to_string(),
                format!("{:.2}", r.summary.total_expense),
            ],
            vec![
                "Net profit".into(),
                String::new(),
                format!("{:.2}", r.summary.net_profit),
            ],
        ];
        println!("{}", pretty_table(&["", "Entries", &r.currency], rows));
        println!(
            "Estimated annual income: {}",
            fmt_grouped(&r.estimated_annual_income, &r.currency)
        );
        println!("[{}] {}", r.alert.severity.to_string().to_uppercase(), r.alert.message);
    }
    Ok(())
}

/// Reads the set once and derives every figure from that snapshot.
pub fn build(conn: &Connection, user: &str) -> Result<Report> {
    let mut ledger = open_ledger(conn)?;
    let set = ledger.get_or_init(user)?;
    let cfg = ledger.config();

    let estimated_annual_income = estimate_annual_income(&set, cfg)?;
    let alert = generate_alerts(estimated_annual_income, cfg)
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("alert generator returned nothing"))?;

    Ok(Report {
        user_id: user.to_string(),
        currency: cfg.currency.clone(),
        income_count: set.iter().filter(|t| t.kind == TxKind::Income).count(),
        expense_count: set.iter().filter(|t| t.kind == TxKind::Expense).count(),
        summary: summarize(&set)?,
        estimated_annual_income,
        alert,
    })
}
