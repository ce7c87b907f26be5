// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::open_ledger;
use crate::models::Alert;
use crate::utils::{fmt_grouped, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct AlertsView {
    pub estimated_annual_income: Decimal,
    pub threshold: Decimal,
    pub currency: String,
    pub alerts: Vec<Alert>,
}

pub fn handle(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = build(conn, user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &view)? {
        println!(
            "Estimated annual income: {}",
            fmt_grouped(&view.estimated_annual_income, &view.currency)
        );
        let rows = view
            .alerts
            .iter()
            .map(|a| vec![a.severity.to_string().to_uppercase(), a.message.clone()])
            .collect();
        println!("{}", pretty_table(&["Level", "Message"], rows));
    }
    Ok(())
}

pub fn build(conn: &Connection, user: &str) -> Result<AlertsView> {
    let mut ledger = open_ledger(conn)?;
    let (estimated_annual_income, alerts) = ledger.alerts(user)?;
    Ok(AlertsView {
        estimated_annual_income,
        threshold: ledger.config().threshold,
        currency: ledger.config().currency.clone(),
        alerts,
    })
}
