// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::FixedOffset;
use gofinances::aggregate::{
    NO_TRANSACTIONS, breakdown_with_registry, compute_category_breakdown, compute_highlights,
    transaction_cards,
};
use gofinances::error::FinanceError;
use gofinances::locale::Locale;
use gofinances::models::{Category, RawAmount, TransactionRecord, TransactionType};
use gofinances::period::ReferenceMonth;
use rust_decimal::Decimal;

fn rec(id: &str, amount: &str, kind: TransactionType, category: &str, date: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        name: format!("tx {}", id),
        amount: RawAmount::from(amount),
        kind,
        category: category.into(),
        date: date.into(),
    }
}

fn income(id: &str, amount: &str, date: &str) -> TransactionRecord {
    rec(id, amount, TransactionType::Positive, "salary", date)
}

fn expense(id: &str, amount: &str, category: &str, date: &str) -> TransactionRecord {
    rec(id, amount, TransactionType::Negative, category, date)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn april() -> ReferenceMonth {
    ReferenceMonth::new(2023, 4).unwrap()
}

#[test]
fn empty_input_gives_zero_highlights_and_sentinels() {
    let h = compute_highlights(&[], &Locale::default()).unwrap();
    assert_eq!(h.entries.value, Decimal::ZERO);
    assert_eq!(h.expenses.value, Decimal::ZERO);
    assert_eq!(h.total.value, Decimal::ZERO);
    assert_eq!(h.entries.amount, "R$ 0,00");
    assert_eq!(h.entries.last_transaction, NO_TRANSACTIONS);
    assert_eq!(h.expenses.last_transaction, NO_TRANSACTIONS);
    assert_eq!(h.total.last_transaction, NO_TRANSACTIONS);
}

#[test]
fn income_and_food_expense_scenario() {
    let locale = Locale::default();
    let records = vec![
        income("1", "100", "2023-04-01"),
        expense("2", "40", "food", "2023-04-05"),
    ];

    let h = compute_highlights(&records, &locale).unwrap();
    assert_eq!(h.entries.amount, "R$ 100,00");
    assert_eq!(h.expenses.amount, "R$ 40,00");
    assert_eq!(h.total.amount, "R$ 60,00");
    assert_eq!(h.entries.last_transaction, "Última entrada dia 1 de abril");
    assert_eq!(h.expenses.last_transaction, "Última saída dia 5 de abril");
    assert_eq!(h.total.last_transaction, "01 a 5 de abril");

    let shares = compute_category_breakdown(&records, april(), &locale).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].key, "food");
    assert_eq!(shares[0].name, "Alimentação");
    assert_eq!(shares[0].total, dec("40"));
    assert_eq!(shares[0].formatted_total, "R$ 40,00");
    assert_eq!(shares[0].color, "#FF872C");
    assert_eq!(shares[0].percentage, "100.00%");
}

#[test]
fn net_total_is_exact_decimal_difference() {
    let records = vec![
        income("1", "0.1", "2023-04-01T10:00:00Z"),
        income("2", "0.2", "2023-04-02T10:00:00Z"),
        expense("3", "0.3", "food", "2023-04-03T10:00:00Z"),
        expense("4", "1234.56", "car", "2023-04-04T10:00:00Z"),
    ];
    let h = compute_highlights(&records, &Locale::default()).unwrap();
    assert_eq!(h.entries.value, dec("0.3"));
    assert_eq!(h.expenses.value, dec("1234.86"));
    assert_eq!(h.entries.value - h.expenses.value, h.total.value);
    assert_eq!(h.total.amount, "-R$ 1.234,56");
}

#[test]
fn only_expenses_leaves_entry_sentinel() {
    let records = vec![expense("1", "10", "food", "2023-04-20T15:00:00Z")];
    let h = compute_highlights(&records, &Locale::default()).unwrap();
    assert_eq!(h.entries.last_transaction, NO_TRANSACTIONS);
    assert_eq!(h.expenses.last_transaction, "Última saída dia 20 de abril");
    assert_eq!(h.total.amount, "-R$ 10,00");
}

#[test]
fn latest_date_wins_regardless_of_order() {
    let records = vec![
        income("1", "10", "2023-04-13T12:00:00Z"),
        income("2", "10", "2023-04-02T12:00:00Z"),
        expense("3", "5", "food", "2023-03-30T12:00:00Z"),
        expense("4", "5", "food", "2023-04-16T12:00:00Z"),
        expense("5", "5", "food", "2023-04-03T12:00:00Z"),
    ];
    let h = compute_highlights(&records, &Locale::default()).unwrap();
    assert_eq!(h.entries.last_transaction, "Última entrada dia 13 de abril");
    assert_eq!(h.expenses.last_transaction, "Última saída dia 16 de abril");
    assert_eq!(h.total.last_transaction, "01 a 16 de abril");
}

#[test]
fn same_category_expenses_merge() {
    let records = vec![
        expense("1", "30", "food", "2023-04-05"),
        expense("2", "70", "food", "2023-04-28"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].total, dec("100"));
    assert_eq!(shares[0].percentage, "100.00%");
}

#[test]
fn expense_in_other_month_is_excluded() {
    let records = vec![
        expense("1", "30", "food", "2023-04-05"),
        expense("2", "70", "car", "2023-05-02"),
        expense("3", "15", "food", "2022-04-10"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].key, "food");
    assert_eq!(shares[0].total, dec("30"));
    assert_eq!(shares[0].percentage, "100.00%");
}

#[test]
fn month_without_expenses_is_empty() {
    let records = vec![
        income("1", "500", "2023-04-05"),
        expense("2", "70", "car", "2023-05-02"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert!(shares.is_empty());
}

#[test]
fn zero_amount_expenses_emit_nothing() {
    let records = vec![expense("1", "0", "food", "2023-04-05")];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert!(shares.is_empty());
}

#[test]
fn breakdown_follows_registry_order_and_sums_to_total() {
    let records = vec![
        expense("1", "10", "studies", "2023-04-01T12:00:00Z"),
        expense("2", "20", "food", "2023-04-02T12:00:00Z"),
        expense("3", "70", "purchases", "2023-04-03T12:00:00Z"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    let keys: Vec<&str> = shares.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["purchases", "food", "studies"]);
    let pct: Vec<&str> = shares.iter().map(|s| s.percentage.as_str()).collect();
    assert_eq!(pct, ["70.00%", "20.00%", "10.00%"]);
    let sum: Decimal = shares.iter().map(|s| s.total).sum();
    assert_eq!(sum, dec("100"));
    assert!(shares.iter().all(|s| s.total > Decimal::ZERO));
}

#[test]
fn percentages_round_to_two_places() {
    let records = vec![
        expense("1", "1", "food", "2023-04-02T12:00:00Z"),
        expense("2", "2", "car", "2023-04-03T12:00:00Z"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert_eq!(shares[0].key, "food");
    assert_eq!(shares[0].percentage, "33.33%");
    assert_eq!(shares[1].key, "car");
    assert_eq!(shares[1].percentage, "66.67%");
}

#[test]
fn unregistered_category_counts_toward_total_only() {
    let records = vec![
        expense("1", "25", "food", "2023-04-02T12:00:00Z"),
        expense("2", "75", "gifts", "2023-04-03T12:00:00Z"),
    ];
    let shares = compute_category_breakdown(&records, april(), &Locale::default()).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].percentage, "25.00%");
}

#[test]
fn custom_registry_is_respected() {
    let registry = vec![Category {
        key: "gifts".into(),
        name: "Presentes".into(),
        icon: "gift".into(),
        color: "#000000".into(),
    }];
    let records = vec![expense("1", "75", "gifts", "2023-04-03T12:00:00Z")];
    let shares =
        breakdown_with_registry(&records, april(), &registry, &Locale::default()).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].name, "Presentes");
    assert_eq!(shares[0].percentage, "100.00%");
}

#[test]
fn month_boundaries_use_locale_offset() {
    // 22:00 on April 30th in Brasília, already May in UTC
    let records = vec![expense("1", "50", "food", "2023-05-01T01:00:00Z")];

    let brt = Locale::default();
    assert_eq!(
        compute_category_breakdown(&records, april(), &brt).unwrap().len(),
        1
    );

    let utc = Locale::pt_br(FixedOffset::east_opt(0).unwrap());
    assert!(compute_category_breakdown(&records, april(), &utc)
        .unwrap()
        .is_empty());
    assert_eq!(
        compute_category_breakdown(&records, april().next(), &utc)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn numeric_json_amounts_are_accepted() {
    let raw = r#"[
        {"id":"1","name":"Salário","amount":1500.5,"type":"positive","category":"salary","date":"2023-04-01T12:00:00.000Z"},
        {"id":"2","name":"Almoço","amount":"35.25","type":"negative","category":"food","date":"2023-04-02T12:00:00.000Z"}
    ]"#;
    let records: Vec<TransactionRecord> = serde_json::from_str(raw).unwrap();
    let h = compute_highlights(&records, &Locale::default()).unwrap();
    assert_eq!(h.entries.amount, "R$ 1.500,50");
    assert_eq!(h.total.value, dec("1465.25"));
}

#[test]
fn malformed_amount_fails_whole_call() {
    let records = vec![
        income("1", "100", "2023-04-01"),
        expense("bad", "dez reais", "food", "2023-04-05"),
    ];
    let err = compute_highlights(&records, &Locale::default()).unwrap_err();
    assert_eq!(
        err,
        FinanceError::InvalidInput {
            id: "bad".into(),
            field: "amount",
            value: "dez reais".into(),
        }
    );
}

#[test]
fn malformed_date_fails_breakdown_even_outside_month() {
    let records = vec![
        expense("1", "10", "food", "2023-04-05"),
        income("bad", "10", "someday"),
    ];
    let err = compute_category_breakdown(&records, april(), &Locale::default()).unwrap_err();
    assert!(matches!(err, FinanceError::InvalidInput { field: "date", .. }));
}

#[test]
fn negative_amount_is_rejected() {
    let records = vec![expense("neg", "-10", "food", "2023-04-05")];
    let err = compute_highlights(&records, &Locale::default()).unwrap_err();
    assert!(matches!(err, FinanceError::InvalidInput { field: "amount", .. }));
}

#[test]
fn cards_format_amounts_dates_and_categories() {
    let records = vec![
        income("1", "2500", "2023-04-01T15:00:00Z"),
        expense("2", "40", "food", "2023-04-05T12:00:00Z"),
        expense("3", "9.9", "unknown", "2023-04-06T12:00:00Z"),
    ];
    let cards = transaction_cards(&records, &Locale::default()).unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].amount, "R$ 2.500,00");
    assert_eq!(cards[0].category, "Salário");
    assert_eq!(cards[0].date, "01/04/23");
    assert_eq!(cards[1].amount, "- R$ 40,00");
    assert_eq!(cards[1].category, "Alimentação");
    assert_eq!(cards[2].category, "unknown");
    assert_eq!(cards[2].amount, "- R$ 9,90");
}
