// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use formalize::commands::{alerts, report, settings};
use formalize::config::EngineConfig;
use formalize::db::{self, SqliteStore};
use formalize::{cli, Ledger, Severity, TxKind};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn config_set(conn: &Connection, key: &str, value: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "formalize", "config", "set", "--key", key, "--value", value,
    ]);
    if let Some(("config", config_m)) = matches.subcommand() {
        settings::handle(conn, config_m)
    } else {
        panic!("no config subcommand");
    }
}

#[test]
fn report_for_fresh_user() {
    let conn = setup();
    let r = report::build(&conn, "1").unwrap();
    assert_eq!(r.income_count, 1);
    assert_eq!(r.expense_count, 1);
    assert_eq!(r.summary.net_profit, Decimal::from(450_000));
    assert_eq!(r.estimated_annual_income, Decimal::from(30_000_000));
    assert_eq!(r.alert.severity, Severity::Warning);
    assert_eq!(r.currency, "COP");
}

#[test]
fn alerts_cross_into_danger_after_large_income() {
    let conn = setup();
    let mut ledger = Ledger::new(SqliteStore::new(&conn));
    ledger
        .append("1", TxKind::Income, "Annual contract", Decimal::from(500_000))
        .unwrap();

    let view = alerts::build(&conn, "1").unwrap();
    assert_eq!(view.estimated_annual_income, Decimal::from(50_000_000));
    assert_eq!(view.threshold, Decimal::from(50_000_000));
    assert_eq!(view.alerts.len(), 1);
    assert_eq!(view.alerts[0].severity, Severity::Danger);
}

#[test]
fn stored_settings_drive_the_engine() {
    let conn = setup();
    config_set(&conn, "threshold", "100000000").unwrap();
    config_set(&conn, "currency", "usd").unwrap();

    let cfg = EngineConfig::load(&conn).unwrap();
    assert_eq!(cfg.threshold, Decimal::from(100_000_000));
    assert_eq!(cfg.currency, "USD");

    let view = alerts::build(&conn, "1").unwrap();
    assert_eq!(view.alerts[0].severity, Severity::Info);
    assert!(view.alerts[0].message.contains("100,000,000 USD"));
}

#[test]
fn invalid_settings_are_rejected_and_not_stored() {
    let conn = setup();
    assert!(config_set(&conn, "threshold", "a lot").is_err());
    assert!(config_set(&conn, "warning_ratio", "2").is_err());
    assert!(config_set(&conn, "speed", "fast").is_err());

    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
        .unwrap();
    assert_eq!(n, 0);
    assert_eq!(EngineConfig::load(&conn).unwrap(), EngineConfig::default());
}
