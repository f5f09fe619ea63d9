// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{compute_category_breakdown, compute_highlights};
use crate::locale::Locale;
use crate::models::{CategoryShare, Highlights};
use crate::period::ReferenceMonth;
use crate::session::Session;
use crate::store::TransactionRepository;
use crate::utils::{load_locale, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn dashboard(conn: &Connection, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let highlights = query_highlights(conn, session)?;
    if !maybe_print_json(json_flag, jsonl_flag, &highlights)? {
        if let Some(user) = session.user() {
            println!("Olá, {}", user.name);
        }
        let rows = [
            ("Entradas", &highlights.entries),
            ("Saídas", &highlights.expenses),
            ("Total", &highlights.total),
        ]
        .into_iter()
        .map(|(title, card)| {
            vec![
                title.to_string(),
                card.amount.clone(),
                card.last_transaction.clone(),
            ]
        })
        .collect();
        println!("{}", pretty_table(&["", "Amount", "Last transaction"], rows));
    }
    Ok(())
}

pub fn query_highlights(conn: &Connection, session: &Session) -> Result<Highlights> {
    let user = session.require_user()?;
    let locale = load_locale(conn)?;
    let records = TransactionRepository::new(conn).load(&user.id)?;
    Ok(compute_highlights(&records, &locale)?)
}

pub fn resume(conn: &Connection, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let locale = load_locale(conn)?;
    let month = selected_month(sub, &locale)?;
    let shares = query_breakdown(conn, session, month)?;
    if !maybe_print_json(json_flag, jsonl_flag, &shares)? {
        println!("Resumo por categoria: {}", month.title());
        let rows = shares
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    s.formatted_total.clone(),
                    s.percentage.clone(),
                    s.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share", "Color"], rows)
        );
    }
    Ok(())
}

/// `--month` (or the current month), shifted by `--prev` / `--next`.
pub fn selected_month(sub: &clap::ArgMatches, locale: &Locale) -> Result<ReferenceMonth> {
    let month = match sub.get_one::<String>("month") {
        Some(raw) => raw.parse::<ReferenceMonth>()?,
        None => ReferenceMonth::current(locale),
    };
    Ok(if sub.get_flag("prev") {
        month.prev()
    } else if sub.get_flag("next") {
        month.next()
    } else {
        month
    })
}

pub fn query_breakdown(
    conn: &Connection,
    session: &Session,
    month: ReferenceMonth,
) -> Result<Vec<CategoryShare>> {
    let user = session.require_user()?;
    let locale = load_locale(conn)?;
    let records = TransactionRepository::new(conn).load(&user.id)?;
    Ok(compute_category_breakdown(&records, month, &locale)?)
}
