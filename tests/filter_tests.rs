// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use extrato::filter::{active_filter_count, apply, FilterCriteria};
use extrato::models::{Category, LedgerEntry, TransactionDraft, TransactionType};
use extrato::utils::{parse_date, parse_decimal};

fn entry(tx_type: &str, value: &str, category: &str, date: &str) -> LedgerEntry {
    LedgerEntry::Pending(TransactionDraft::from_raw(tx_type, category, value, date).unwrap())
}

fn ledger() -> Vec<LedgerEntry> {
    vec![
        entry("income", "1500.00", "Food", "2024-03-10"),
        entry("expense", "200.50", "Transport", "2024-02-01"),
        entry("expense", "80", "Food", "2024-01-20"),
        entry("income", "95", "Health", "2024-01-15"),
    ]
}

#[test]
fn empty_criteria_is_identity() {
    let entries = ledger();
    let criteria = FilterCriteria::default();
    assert!(criteria.is_empty());
    assert_eq!(apply(&entries, &criteria), entries);
}

#[test]
fn category_and_type_are_exact_matches() {
    let entries = ledger();
    let criteria = FilterCriteria {
        category: Some(Category::Food),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.category() == Category::Food));

    let criteria = FilterCriteria {
        tx_type: Some(TransactionType::Expense),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.tx_type() == TransactionType::Expense));
}

#[test]
fn date_bounds_are_inclusive() {
    let entries = ledger();
    let criteria = FilterCriteria {
        date_from: Some(parse_date("2024-01-20").unwrap()),
        date_to: Some(parse_date("2024-02-01").unwrap()),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    let dates: Vec<String> = out.iter().map(|e| e.date().to_string()).collect();
    assert_eq!(dates, vec!["2024-02-01", "2024-01-20"]);
}

#[test]
fn value_bounds_are_inclusive() {
    let entries = ledger();
    let criteria = FilterCriteria {
        value_min: Some(parse_decimal("95").unwrap()),
        value_max: Some(parse_decimal("200,50").unwrap()),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    let values: Vec<String> = out.iter().map(|e| e.value().to_string()).collect();
    assert_eq!(values, vec!["200.50", "95"]);
}

#[test]
fn constraints_combine_with_and() {
    let entries = ledger();
    let criteria = FilterCriteria {
        category: Some(Category::Food),
        tx_type: Some(TransactionType::Expense),
        value_max: Some(parse_decimal("100").unwrap()),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value().to_string(), "80");
}

#[test]
fn narrowing_never_reorders() {
    let entries = ledger();
    let criteria = FilterCriteria {
        value_min: Some(parse_decimal("81").unwrap()),
        ..Default::default()
    };
    let out = apply(&entries, &criteria);
    let kept: Vec<String> = out.iter().map(|e| e.value().to_string()).collect();
    assert_eq!(kept, vec!["1500.00", "200.50", "95"]);
}

#[test]
fn active_count_matches_enforced_constraints() {
    assert_eq!(active_filter_count(&FilterCriteria::default()), 0);
    let criteria = FilterCriteria {
        category: Some(Category::Health),
        date_from: Some(parse_date("2024-01-01").unwrap()),
        value_max: Some(parse_decimal("100").unwrap()),
        ..Default::default()
    };
    assert_eq!(active_filter_count(&criteria), 3);
    let all = FilterCriteria {
        category: Some(Category::Health),
        tx_type: Some(TransactionType::Income),
        date_from: Some(parse_date("2024-01-01").unwrap()),
        date_to: Some(parse_date("2024-12-31").unwrap()),
        value_min: Some(parse_decimal("1").unwrap()),
        value_max: Some(parse_decimal("100").unwrap()),
    };
    assert_eq!(active_filter_count(&all), 6);
}
