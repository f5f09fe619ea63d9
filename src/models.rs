// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income
    Positive,
    /// Expense
    Negative,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Positive => "positive",
            TransactionType::Negative => "negative",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount as it sits in storage: older records carry a JSON number, records
/// written by the register flow carry the raw form string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

/// One element of the per-user JSON array. Fields are kept unparsed so a
/// single malformed record is reported by the aggregation call that reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub name: String,
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
}

/// A record whose amount and date have been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub kind: TransactionType,
    pub category: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightCard {
    pub value: Decimal,
    pub amount: String,
    pub last_transaction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    pub entries: HighlightCard,
    pub expenses: HighlightCard,
    pub total: HighlightCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub key: String,
    pub name: String,
    pub total: Decimal,
    pub formatted_total: String,
    pub color: String,
    pub percentage: String,
}

/// Listing row shown under the dashboard highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionCard {
    pub id: String,
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
}
