// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::locale::{Locale, MONTH_NAMES};
use anyhow::{Result, anyhow};
use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use std::str::FromStr;

/// Calendar month selected on the resume view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceMonth {
    pub year: i32,
    pub month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Invalid month number {}", month));
        }
        Ok(ReferenceMonth { year, month })
    }

    /// Month containing "now" in the locale's offset.
    pub fn current(locale: &Locale) -> Self {
        Self::of(locale, Utc::now())
    }

    pub fn of(locale: &Locale, instant: DateTime<Utc>) -> Self {
        let local = locale.to_local(instant);
        ReferenceMonth {
            year: local.year(),
            month: local.month(),
        }
    }

    pub fn contains(&self, locale: &Locale, instant: DateTime<Utc>) -> bool {
        Self::of(locale, instant) == *self
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            ReferenceMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            ReferenceMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            ReferenceMonth {
                year: self.year - 1,
                month: 12,
            }
        } else {
            ReferenceMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Header text, e.g. `abril, 2023`.
    pub fn title(&self) -> String {
        format!("{}, {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl FromStr for ReferenceMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("Invalid month '{}', expected YYYY-MM", s))?;
        let year: i32 = y
            .parse()
            .map_err(|_| anyhow!("Invalid month '{}', expected YYYY-MM", s))?;
        let month: u32 = m
            .parse()
            .map_err(|_| anyhow!("Invalid month '{}', expected YYYY-MM", s))?;
        ReferenceMonth::new(year, month)
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
