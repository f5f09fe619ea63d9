// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::parse_amount;
use crate::categories;
use crate::locale::Locale;
use crate::models::TransactionRecord;
use crate::session::Session;
use crate::store::TransactionRepository;
use crate::utils::{load_locale, pretty_table};
use anyhow::Result;
use log::warn;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, session: &Session) -> Result<()> {
    let user = session.require_user()?;
    let locale = load_locale(conn)?;
    let records = TransactionRepository::new(conn).load(&user.id)?;
    let rows = find_issues(&records, &locale);

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        warn!("doctor found {} issues", rows.len());
        println!("{}", pretty_table(&["Issue", "Transaction", "Detail"], rows));
    }
    Ok(())
}

/// One row per problem that would make an aggregation call fail or
/// silently skip a record.
pub fn find_issues(records: &[TransactionRecord], locale: &Locale) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for r in records {
        match parse_amount(&r.amount) {
            None => rows.push(vec!["invalid_amount".into(), r.id.clone(), r.amount.to_string()]),
            Some(a) if a < Decimal::ZERO => {
                rows.push(vec!["negative_amount".into(), r.id.clone(), r.amount.to_string()])
            }
            Some(_) => {}
        }
        if locale.parse_timestamp(&r.date).is_none() {
            rows.push(vec!["invalid_date".into(), r.id.clone(), r.date.clone()]);
        }
        if categories::find(&r.category).is_none() {
            rows.push(vec!["unknown_category".into(), r.id.clone(), r.category.clone()]);
        }
    }
    rows
}
