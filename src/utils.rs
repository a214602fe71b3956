// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationError;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Strict ledger date: zero-padded `YYYY-MM-DD` only. Chrono alone would
/// accept unpadded fields like `2024-1-5`, so the pattern is anchored first.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let t = s.trim();
    if !DATE_RE.is_match(t) {
        return Err(ValidationError::InvalidDate(t.to_string()));
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(t.to_string()))
}

/// Parses an amount with either comma or point as the fractional separator,
/// stripping thousands separators: `1500.00`, `200,50`, `1.500,00` and
/// `1,500.00` all parse. When both separators appear, the rightmost one is
/// the fractional separator.
pub fn parse_decimal(s: &str) -> Result<Decimal, ValidationError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ValidationError::InvalidValue(t.to_string()));
    }
    let commas = t.matches(',').count();
    let points = t.matches('.').count();
    let normalized = match (commas, points) {
        (0, 0) | (0, 1) => t.to_string(),
        (0, _) => t.replace('.', ""),
        (1, 0) => t.replace(',', "."),
        (_, 0) => t.replace(',', ""),
        _ => {
            let c = t.rfind(',').unwrap();
            let p = t.rfind('.').unwrap();
            if c > p {
                t.replace('.', "").replace(',', ".")
            } else {
                t.replace(',', "")
            }
        }
    };
    normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidValue(t.to_string()))
}

/// Renders an amount as Brazilian currency text: `R$ 1.500,00`, with the
/// minus sign ahead of the symbol for negatives.
pub fn fmt_money(d: &Decimal) -> String {
    let rounded = d.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, frac)
}

/// Missing amounts render as a zero-value string instead of failing.
pub fn fmt_money_or_zero(d: Option<Decimal>) -> String {
    fmt_money(&d.unwrap_or(Decimal::ZERO))
}

/// Month bucket label for statement grouping, e.g. `January 2024`. Stable
/// for every date in a calendar month and distinct across months, including
/// the same month of different years.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Default date for manual entry.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
