// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, LedgerEntry, TransactionType};

/// Chart palette, assigned to categories in first-seen order.
pub const CATEGORY_PALETTE: [&str; 5] =
    ["#2196F3", "#9C27B0", "#E91E63", "#FF9800", "#4CAF50"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Folds the ledger into income/expense totals and the signed net balance:
/// income adds, expense subtracts.
pub fn summarize(entries: &[LedgerEntry]) -> Summary {
    let mut summary = Summary {
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
        balance: Decimal::ZERO,
    };
    for entry in entries {
        match entry.tx_type() {
            TransactionType::Income => {
                summary.income += entry.value();
                summary.balance += entry.value();
            }
            TransactionType::Expense => {
                summary.expense += entry.value();
                summary.balance -= entry.value();
            }
        }
    }
    summary
}

pub fn total_income(entries: &[LedgerEntry]) -> Decimal {
    summarize(entries).income
}

pub fn total_expense(entries: &[LedgerEntry]) -> Decimal {
    summarize(entries).expense
}

pub fn balance(entries: &[LedgerEntry]) -> Decimal {
    summarize(entries).balance
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub total: Decimal,
    pub color: &'static str,
}

/// Per-category expense totals for the spending chart. Income entries are
/// excluded; colors come from the fixed palette in first-seen category
/// order, so a category keeps its color while the ledger grows.
pub fn category_breakdown(entries: &[LedgerEntry]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for entry in entries {
        if entry.tx_type() != TransactionType::Expense {
            continue;
        }
        match slices.iter_mut().find(|s| s.category == entry.category()) {
            Some(slice) => slice.total += entry.value(),
            None => {
                let color = CATEGORY_PALETTE[slices.len() % CATEGORY_PALETTE.len()];
                slices.push(CategorySlice {
                    category: entry.category(),
                    total: entry.value(),
                    color,
                });
            }
        }
    }
    slices
}
