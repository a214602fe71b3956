// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use std::fs;

use crate::ingest;
use crate::store::LedgerStore;

pub fn handle(store: &mut LedgerStore, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, user, sub),
        _ => Ok(()),
    }
}

fn import_transactions(store: &mut LedgerStore, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    if !path.to_lowercase().ends_with(".csv") {
        return Err(anyhow!("Expected a .csv file, got '{}'", path));
    }
    let raw = fs::read_to_string(path).with_context(|| format!("Open CSV {}", path))?;
    let drafts = ingest::parse_csv(&raw).with_context(|| format!("Import {}", path))?;

    let mut created = 0usize;
    for draft in drafts {
        store
            .create(user, draft)
            .with_context(|| format!("Persist imported row {}", created + 1))?;
        created += 1;
    }
    println!("Imported {} transactions from {}", created, path);
    Ok(())
}
