// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::criteria_from_matches;
use crate::models::{TransactionDraft, TransactionPatch};
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, today};

pub fn handle(store: &mut LedgerStore, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, user, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, user, sub)?,
        Some(("rm", sub)) => rm(store, user, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut LedgerStore, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let raw_date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| today().to_string());
    let draft = TransactionDraft::from_raw(
        sub.get_one::<String>("type").unwrap(),
        sub.get_one::<String>("category").unwrap(),
        sub.get_one::<String>("value").unwrap(),
        &raw_date,
    )?;
    let entry = store.create(user, draft)?;
    println!(
        "Recorded {} {} ({}) on {}",
        entry.tx_type(),
        fmt_money(&entry.value()),
        entry.category(),
        entry.date()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub status: String,
    pub date: String,
    pub tx_type: String,
    pub category: String,
    pub value: String,
}

pub fn rows_for_list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let criteria = criteria_from_matches(sub)?;
    let mut entries = store.filtered(&criteria);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        entries.truncate(*limit);
    }
    Ok(entries
        .iter()
        .map(|e| TransactionRow {
            id: e.id().unwrap_or_default().to_string(),
            status: if e.is_pending() { "pending" } else { "confirmed" }.to_string(),
            date: e.date().to_string(),
            tx_type: e.tx_type().to_string(),
            category: e.category().to_string(),
            value: e.value().to_string(),
        })
        .collect())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = rows_for_list(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.tx_type.clone(),
                    r.category.clone(),
                    r.value.clone(),
                    r.id.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Value", "Id", "Status"], rows)
        );
    }
    Ok(())
}

fn update(store: &mut LedgerStore, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = TransactionPatch {
        tx_type: sub.get_one::<String>("type").cloned(),
        value: sub.get_one::<String>("value").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        date: sub.get_one::<String>("date").cloned(),
    };
    store.update(id, user, &patch)?;
    println!("Updated transaction '{}'", id);
    Ok(())
}

fn rm(store: &mut LedgerStore, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    store.delete(id, user)?;
    println!("Removed transaction '{}'", id);
    Ok(())
}
