// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::open_ledger;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, user: &str, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("end", _)) = m.subcommand() {
        if open_ledger(conn)?.end_session(user)? {
            println!("Session for user '{}' ended", user);
        } else {
            println!("No active session for user '{}'", user);
        }
    }
    Ok(())
}
