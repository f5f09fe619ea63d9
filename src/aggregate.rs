// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard highlights and the monthly per-category resume.
//!
//! Every function here is pure over the snapshot it is handed. All records
//! are validated before any total is computed, so one malformed record fails
//! the whole call instead of producing partial figures.

use crate::categories;
use crate::error::FinanceError;
use crate::locale::Locale;
use crate::models::{
    Category, CategoryShare, HighlightCard, Highlights, RawAmount, Transaction, TransactionCard,
    TransactionRecord, TransactionType,
};
use crate::period::ReferenceMonth;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

/// Label used when a highlight has no transaction to point at.
pub const NO_TRANSACTIONS: &str = "Não há transações";

pub fn parse_amount(raw: &RawAmount) -> Option<Decimal> {
    let text = raw.to_string();
    let s = text.trim();
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

pub fn parse_transaction(
    record: &TransactionRecord,
    locale: &Locale,
) -> Result<Transaction, FinanceError> {
    let amount = parse_amount(&record.amount)
        .ok_or_else(|| FinanceError::invalid(&record.id, "amount", record.amount.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FinanceError::invalid(
            &record.id,
            "amount",
            record.amount.to_string(),
        ));
    }
    let date = locale
        .parse_timestamp(&record.date)
        .ok_or_else(|| FinanceError::invalid(&record.id, "date", record.date.as_str()))?;
    Ok(Transaction {
        id: record.id.clone(),
        name: record.name.clone(),
        amount,
        kind: record.kind,
        category: record.category.clone(),
        date,
    })
}

pub fn parse_all(
    records: &[TransactionRecord],
    locale: &Locale,
) -> Result<Vec<Transaction>, FinanceError> {
    records.iter().map(|r| parse_transaction(r, locale)).collect()
}

fn checked_sum<'a>(
    txs: impl IntoIterator<Item = &'a Transaction>,
) -> Result<Decimal, FinanceError> {
    let mut acc = Decimal::ZERO;
    for t in txs {
        acc = acc
            .checked_add(t.amount)
            .ok_or_else(|| FinanceError::invalid(&t.id, "amount", t.amount.to_string()))?;
    }
    Ok(acc)
}

fn latest<'a>(txs: impl IntoIterator<Item = &'a Transaction>) -> Option<DateTime<Utc>> {
    txs.into_iter().map(|t| t.date).max()
}

fn label(locale: &Locale, date: Option<DateTime<Utc>>, prefix: &str) -> String {
    match date {
        Some(d) => format!("{}{}", prefix, locale.day_and_month(d)),
        None => NO_TRANSACTIONS.to_string(),
    }
}

pub fn compute_highlights(
    records: &[TransactionRecord],
    locale: &Locale,
) -> Result<Highlights, FinanceError> {
    let txs = parse_all(records, locale)?;
    let entries: Vec<&Transaction> = txs
        .iter()
        .filter(|t| t.kind == TransactionType::Positive)
        .collect();
    let expenses: Vec<&Transaction> = txs
        .iter()
        .filter(|t| t.kind == TransactionType::Negative)
        .collect();

    let entries_total = checked_sum(entries.iter().copied())?;
    let expenses_total = checked_sum(expenses.iter().copied())?;
    let total = entries_total - expenses_total;
    debug!(
        "highlights over {} records: entries={} expenses={}",
        txs.len(),
        entries_total,
        expenses_total
    );

    Ok(Highlights {
        entries: HighlightCard {
            value: entries_total,
            amount: locale.currency(&entries_total),
            last_transaction: label(
                locale,
                latest(entries.iter().copied()),
                "Última entrada dia ",
            ),
        },
        expenses: HighlightCard {
            value: expenses_total,
            amount: locale.currency(&expenses_total),
            last_transaction: label(
                locale,
                latest(expenses.iter().copied()),
                "Última saída dia ",
            ),
        },
        total: HighlightCard {
            value: total,
            amount: locale.currency(&total),
            last_transaction: label(locale, latest(&txs), "01 a "),
        },
    })
}

pub fn compute_category_breakdown(
    records: &[TransactionRecord],
    month: ReferenceMonth,
    locale: &Locale,
) -> Result<Vec<CategoryShare>, FinanceError> {
    breakdown_with_registry(records, month, categories::all(), locale)
}

/// Expense share per registry category for one month, in registry order.
/// Categories with nothing spent are left out, and a month without expenses
/// yields an empty breakdown.
pub fn breakdown_with_registry(
    records: &[TransactionRecord],
    month: ReferenceMonth,
    registry: &[Category],
    locale: &Locale,
) -> Result<Vec<CategoryShare>, FinanceError> {
    let txs = parse_all(records, locale)?;
    let expenses: Vec<&Transaction> = txs
        .iter()
        .filter(|t| t.kind == TransactionType::Negative && month.contains(locale, t.date))
        .collect();
    let total_expenses = checked_sum(expenses.iter().copied())?;
    debug!(
        "breakdown {}: {} expenses totalling {}",
        month,
        expenses.len(),
        total_expenses
    );
    if total_expenses.is_zero() {
        return Ok(Vec::new());
    }

    let mut shares = Vec::new();
    for category in registry {
        let sum = checked_sum(
            expenses
                .iter()
                .copied()
                .filter(|t| t.category == category.key),
        )?;
        if sum > Decimal::ZERO {
            shares.push(CategoryShare {
                key: category.key.clone(),
                name: category.name.clone(),
                total: sum,
                formatted_total: locale.currency(&sum),
                color: category.color.clone(),
                percentage: percentage(sum, total_expenses),
            });
        }
    }
    Ok(shares)
}

// caller guarantees whole > 0 and part <= whole
fn percentage(part: Decimal, whole: Decimal) -> String {
    let pct = (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", pct)
}

pub fn transaction_cards(
    records: &[TransactionRecord],
    locale: &Locale,
) -> Result<Vec<TransactionCard>, FinanceError> {
    let txs = parse_all(records, locale)?;
    Ok(txs
        .into_iter()
        .map(|t| {
            let money = locale.currency(&t.amount);
            let amount = match t.kind {
                TransactionType::Positive => money,
                TransactionType::Negative => format!("- {}", money),
            };
            let category = categories::find(&t.category)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| t.category.clone());
            TransactionCard {
                date: locale.short_date(t.date),
                id: t.id,
                name: t.name,
                amount,
                kind: t.kind,
                category,
            }
        })
        .collect())
}
