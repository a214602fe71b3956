// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// A single field failed the acceptance rules, before any remote call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid type '{0}', expected income/Receita or expense/Despesa")]
    InvalidType(String),

    #[error("invalid value '{0}', expected a positive amount")]
    InvalidValue(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("no fields to update")]
    EmptyUpdate,
}

/// CSV import failures. Row numbers are 1-based and count the header as
/// row 1, so the first data row is row 2.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("missing column '{0}' in header")]
    MissingHeader(&'static str),

    #[error("row {row}: expected at least 4 columns, found {found}")]
    MalformedRow { row: usize, found: usize },

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("no transactions found in file")]
    EmptyFile,

    #[error("unreadable CSV: {0}")]
    Read(#[from] csv::Error),
}

/// Failures reported by the persistence collaborator. Kept separate from
/// [`ValidationError`] so callers can tell a retryable remote fault from a
/// bad field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("failed to load transactions: {0}")]
    Fetch(String),

    #[error("failed to persist transaction: {0}")]
    Persist(String),
}

/// Outcome type for every ledger store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CsvError {
    /// The offending row, when the failure is attributable to one.
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvError::MalformedRow { row, .. } | CsvError::Row { row, .. } => Some(*row),
            _ => None,
        }
    }
}
