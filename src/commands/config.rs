// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::db_path;
use crate::session::user_storage_key;
use crate::utils::{get_utc_offset, pretty_table, set_utc_offset};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let rows = vec![
                vec!["database".into(), db_path()?.display().to_string()],
                vec!["utc_offset".into(), get_utc_offset(conn)?.to_string()],
                vec!["user_storage_key".into(), user_storage_key()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-offset", sub)) => {
            let raw = sub.get_one::<String>("offset").unwrap();
            let offset = set_utc_offset(conn, raw)?;
            println!("UTC offset set to {}", offset);
        }
        _ => {}
    }
    Ok(())
}
