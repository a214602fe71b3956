// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::criteria_from_matches;
use crate::filter::active_filter_count;
use crate::statement::{group_by_month, StatementPager};
use crate::store::LedgerStore;
use crate::utils::{fmt_money, pretty_table};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let criteria = criteria_from_matches(m)?;
    let filtered = store.filtered(&criteria);

    let page_size = *m.get_one::<usize>("page-size").unwrap();
    let increment = *m.get_one::<usize>("page-increment").unwrap();
    let presses = *m.get_one::<usize>("more").unwrap();

    let mut pager = StatementPager::new(page_size, increment);
    pager.reset(filtered.len());
    for _ in 0..presses {
        if !pager.load_more() {
            break;
        }
    }

    let window = pager.window(&filtered);
    if window.is_empty() {
        if active_filter_count(&criteria) > 0 {
            println!("No transactions match the current filters.");
        } else {
            println!("The statement is empty. Record or import transactions first.");
        }
        return Ok(());
    }

    for bucket in group_by_month(window) {
        println!("{}", bucket.label);
        let rows: Vec<Vec<String>> = bucket
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.date().to_string(),
                    e.tx_type().to_string(),
                    e.category().to_string(),
                    fmt_money(&e.value()),
                    e.id().unwrap_or("(pending)").to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Value", "Id"], rows)
        );
    }
    println!(
        "Showing {} of {} transactions{}",
        window.len(),
        filtered.len(),
        if pager.has_more() {
            " (run with --more to reveal more)"
        } else {
            ""
        }
    );
    Ok(())
}
