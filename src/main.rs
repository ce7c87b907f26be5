// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formalize::{cli, commands, db, models::TxKind};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    let conn = db::open_at(&path)?;
    let user = matches
        .get_one::<String>("user")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "1".to_string());
    debug!(db = %path.display(), user = %user, "opened database");

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("income", sub)) => commands::transactions::handle(&conn, &user, TxKind::Income, sub)?,
        Some(("expense", sub)) => {
            commands::transactions::handle(&conn, &user, TxKind::Expense, sub)?
        }
        Some(("summary", sub)) => commands::summary::handle(&conn, &user, sub)?,
        Some(("alerts", sub)) => commands::alerts::handle(&conn, &user, sub)?,
        Some(("report", sub)) => commands::report::handle(&conn, &user, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, &user, sub)?,
        Some(("session", sub)) => commands::session::handle(&conn, &user, sub)?,
        Some(("config", sub)) => commands::settings::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
