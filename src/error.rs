// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the aggregation core. Empty partitions and a zero
/// expense total are not errors; they produce sentinels or empty output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// A stored record carries an amount or date that cannot be used.
    #[error("Invalid {field} '{value}' in transaction {id}")]
    InvalidInput {
        id: String,
        field: &'static str,
        value: String,
    },
}

impl FinanceError {
    pub fn invalid(id: &str, field: &'static str, value: impl Into<String>) -> Self {
        FinanceError::InvalidInput {
            id: id.to_string(),
            field,
            value: value.into(),
        }
    }
}
