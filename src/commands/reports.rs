// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("by-category", sub)) => by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = store.summary();
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&s.income)],
            vec!["Expense".to_string(), fmt_money(&s.expense)],
            vec!["Balance".to_string(), fmt_money(&s.balance)],
        ];
        println!("{}", pretty_table(&["", "Total"], rows));
    }
    Ok(())
}

fn by_category(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let slices = store.category_breakdown();
    if !maybe_print_json(json_flag, jsonl_flag, &slices)? {
        if slices.is_empty() {
            println!("No expense data available.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = slices
            .iter()
            .map(|s| {
                vec![
                    s.category.to_string(),
                    fmt_money(&s.total),
                    s.color.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
    }
    Ok(())
}
