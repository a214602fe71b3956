// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::CsvError;
use crate::models::TransactionDraft;

/// Canonical column names with their accepted Portuguese header synonyms.
const COLUMNS: [(&str, [&str; 2]); 4] = [
    ("type", ["type", "tipo"]),
    ("value", ["value", "valor"]),
    ("category", ["category", "categoria"]),
    ("date", ["date", "data"]),
];

/// Parses raw CSV text into normalized transaction drafts.
///
/// The first line must be a header naming all four columns (case and space
/// insensitive, English or Portuguese names). Each data row is validated in
/// order: column count, type, value, category, date. The first offending
/// row aborts the whole import; a partial import is never produced. A file
/// with a well-formed header but no data rows is an [`CsvError::EmptyFile`].
pub fn parse_csv(raw: &str) -> Result<Vec<TransactionDraft>, CsvError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(raw.as_bytes());

    let headers = rdr.headers()?.clone();
    let idx = resolve_columns(&headers)?;

    let mut drafts = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2; // header is row 1
        let rec = result?;
        if rec.iter().all(|f| f.is_empty()) {
            continue;
        }
        if rec.len() < 4 {
            return Err(CsvError::MalformedRow {
                row,
                found: rec.len(),
            });
        }
        let field = |n: usize| rec.get(idx[n]).unwrap_or("");
        let draft = TransactionDraft::from_raw(field(0), field(2), field(1), field(3))
            .map_err(|source| CsvError::Row { row, source })?;
        drafts.push(draft);
    }

    if drafts.is_empty() {
        return Err(CsvError::EmptyFile);
    }
    Ok(drafts)
}

fn resolve_columns(headers: &StringRecord) -> Result<[usize; 4], CsvError> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.to_lowercase().replace(' ', ""))
        .collect();
    let mut idx = [0usize; 4];
    for (n, (canonical, synonyms)) in COLUMNS.into_iter().enumerate() {
        idx[n] = normalized
            .iter()
            .position(|h| synonyms.contains(&h.as_str()))
            .ok_or(CsvError::MissingHeader(canonical))?;
    }
    Ok(idx)
}
