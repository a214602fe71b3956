// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod users;
pub mod transactions;
pub mod importer;
pub mod statement;
pub mod reports;

use anyhow::Result;

use crate::filter::FilterCriteria;
use crate::utils::{parse_date, parse_decimal};

/// Builds filter criteria from the shared `--category/--type/--from/--to/
/// --min/--max` flags. Absent flags impose no constraint.
pub fn criteria_from_matches(m: &clap::ArgMatches) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default();
    if let Some(raw) = m.get_one::<String>("category") {
        criteria.category = Some(raw.parse()?);
    }
    if let Some(raw) = m.get_one::<String>("type") {
        criteria.tx_type = Some(raw.parse()?);
    }
    if let Some(raw) = m.get_one::<String>("from") {
        criteria.date_from = Some(parse_date(raw)?);
    }
    if let Some(raw) = m.get_one::<String>("to") {
        criteria.date_to = Some(parse_date(raw)?);
    }
    if let Some(raw) = m.get_one::<String>("min") {
        criteria.value_min = Some(parse_decimal(raw)?);
    }
    if let Some(raw) = m.get_one::<String>("max") {
        criteria.value_max = Some(parse_decimal(raw)?);
    }
    Ok(criteria)
}
