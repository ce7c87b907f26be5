// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::open_ledger;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut ledger = open_ledger(conn)?;
    let s = ledger.summarize(user)?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let ccy = ledger.config().currency.clone();
        let rows = vec![
            vec!["Income".into(), format!("{:.2}", s.total_income)],
            vec!["Expenses".into(), format!("{:.2}", s.total_expense)],
            vec!["Net profit".into(), format!("{:.2}", s.net_profit)],
        ];
        println!("{}", pretty_table(&["", &ccy], rows));
    }
    Ok(())
}
