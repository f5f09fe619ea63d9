// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::locale::Locale;
use crate::models::{RawAmount, TransactionRecord, TransactionType};
use crate::utils::parse_decimal;
use anyhow::{Result, anyhow};
use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Form input for the register flow, validated into a storable record.
#[derive(Debug, Clone, Copy)]
pub struct NewTransaction<'a> {
    pub name: &'a str,
    pub amount: &'a str,
    pub kind: &'a str,
    pub category: &'a str,
    pub date: Option<&'a str>,
}

impl<'a> NewTransaction<'a> {
    pub fn into_record(self, locale: &Locale) -> Result<TransactionRecord> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Name is required"));
        }
        let amount = parse_decimal(self.amount)
            .map_err(|_| anyhow!("Amount must be a number, got '{}'", self.amount.trim()))?;
        if amount <= Decimal::ZERO {
            return Err(anyhow!("Amount must be greater than zero"));
        }
        let kind = match self.kind.trim().to_lowercase().as_str() {
            "positive" => TransactionType::Positive,
            "negative" => TransactionType::Negative,
            other => {
                return Err(anyhow!(
                    "Unknown transaction type '{}', expected positive or negative",
                    other
                ));
            }
        };
        let category = categories::find(self.category.trim())
            .ok_or_else(|| anyhow!("Unknown category '{}'", self.category.trim()))?;
        let date = match self.date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => locale
                .parse_timestamp(raw)
                .ok_or_else(|| anyhow!("Invalid date '{}'", raw))?,
            None => Utc::now(),
        };

        Ok(TransactionRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            amount: RawAmount::Text(amount.normalize().to_string()),
            kind,
            category: category.key.clone(),
            date: date.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
