// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::transaction_cards;
use crate::models::TransactionCard;
use crate::register::NewTransaction;
use crate::session::Session;
use crate::store::TransactionRepository;
use crate::utils::{load_locale, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, session, sub)?,
        Some(("list", sub)) => list(conn, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let user = session.require_user()?;
    let locale = load_locale(conn)?;
    let record = NewTransaction {
        name: text_arg(sub, "name"),
        amount: text_arg(sub, "amount"),
        kind: text_arg(sub, "type"),
        category: text_arg(sub, "category"),
        date: sub.get_one::<String>("date").map(|s| s.as_str()),
    }
    .into_record(&locale)?;

    let summary = format!(
        "Recorded {} '{}' of {} in {}",
        record.kind, record.name, record.amount, record.category
    );
    TransactionRepository::new(conn).append(&user.id, record)?;
    println!("{}", summary);
    Ok(())
}

fn text_arg<'a>(sub: &'a clap::ArgMatches, name: &str) -> &'a str {
    sub.get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn list(conn: &Connection, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_cards(conn, session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.date.clone(),
                    c.name.clone(),
                    c.amount.clone(),
                    c.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Name", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

/// Listing rows for the signed-in user, most recently registered first.
pub fn query_cards(
    conn: &Connection,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionCard>> {
    let user = session.require_user()?;
    let locale = load_locale(conn)?;
    let records = TransactionRepository::new(conn).load(&user.id)?;
    let mut cards = transaction_cards(&records, &locale)?;
    cards.reverse();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        cards.truncate(*limit);
    }
    Ok(cards)
}
