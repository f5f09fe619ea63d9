// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! pt-BR presentation of money and dates.
//!
//! Timestamps are stored as UTC instants; every calendar decision (which day
//! or month a transaction belongs to) is made after shifting the instant
//! into the locale's fixed offset.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use rust_decimal::{Decimal, RoundingStrategy};

pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

pub const CURRENCY_SYMBOL: &str = "R$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    offset: FixedOffset,
}

impl Default for Locale {
    fn default() -> Self {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap_or_else(|| Utc.fix());
        Locale::pt_br(brt)
    }
}

impl Locale {
    pub fn pt_br(offset: FixedOffset) -> Self {
        Locale { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset)
    }

    /// `R$ 1.234,56`, negatives as `-R$ 1.234,56`.
    pub fn currency(&self, amount: &Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        format!(
            "{}{} {},{}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(int_part),
            frac_part
        )
    }

    /// Day of month followed by the full month name, e.g. `13 de abril`.
    pub fn day_and_month(&self, instant: DateTime<Utc>) -> String {
        let local = self.to_local(instant);
        format!("{} de {}", local.day(), MONTH_NAMES[local.month0() as usize])
    }

    /// Listing date, `dd/mm/yy`.
    pub fn short_date(&self, instant: DateTime<Utc>) -> String {
        self.to_local(instant).format("%d/%m/%y").to_string()
    }

    /// Accepts RFC 3339 instants, offset-less date-times and bare
    /// `YYYY-MM-DD` dates. The last two are read as local wall-clock time,
    /// a bare date meaning local midnight.
    pub fn parse_timestamp(&self, raw: &str) -> Option<DateTime<Utc>> {
        let s = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })?;
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
