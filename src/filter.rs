// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, LedgerEntry, TransactionType};

/// Multi-field statement filter. `None` on a dimension means no constraint,
/// so there is no ambiguity between "filter by empty" and "no filter".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub tx_type: Option<TransactionType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub value_min: Option<Decimal>,
    pub value_max: Option<Decimal>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        active_filter_count(self) == 0
    }

    fn matches(&self, entry: &LedgerEntry) -> bool {
        if let Some(c) = self.category {
            if entry.category() != c {
                return false;
            }
        }
        if let Some(t) = self.tx_type {
            if entry.tx_type() != t {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if entry.date() < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.date() > to {
                return false;
            }
        }
        if let Some(min) = self.value_min {
            if entry.value() < min {
                return false;
            }
        }
        if let Some(max) = self.value_max {
            if entry.value() > max {
                return false;
            }
        }
        true
    }
}

/// Keeps the entries satisfying every present criterion. Pure: relative
/// order is preserved and all-empty criteria return the input unchanged.
pub fn apply(entries: &[LedgerEntry], criteria: &FilterCriteria) -> Vec<LedgerEntry> {
    entries
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

/// Number of constraints [`apply`] would enforce, shown as the filter badge.
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    [
        criteria.category.is_some(),
        criteria.tx_type.is_some(),
        criteria.date_from.is_some(),
        criteria.date_to.is_some(),
        criteria.value_min.is_some(),
        criteria.value_max.is_some(),
    ]
    .iter()
    .filter(|&&set| set)
    .count()
}
