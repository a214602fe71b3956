// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;

use extrato::gateway::SqliteGateway;
use extrato::store::LedgerStore;
use extrato::{cli, commands, db};

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("user", sub)) => commands::users::handle(&conn, sub)?,
        Some(("tx", sub)) => {
            let (mut store, user) = open_store(conn, &matches)?;
            commands::transactions::handle(&mut store, &user, sub)?;
        }
        Some(("import", sub)) => {
            let (mut store, user) = open_store(conn, &matches)?;
            commands::importer::handle(&mut store, &user, sub)?;
        }
        Some(("statement", sub)) => {
            let (store, _) = open_store(conn, &matches)?;
            commands::statement::handle(&store, sub)?;
        }
        Some(("report", sub)) => {
            let (store, _) = open_store(conn, &matches)?;
            commands::reports::handle(&store, sub)?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Resolves the owner id (flag first, stored selection second) and hydrates
/// a ledger store over the local persistence backend.
fn open_store(conn: Connection, matches: &clap::ArgMatches) -> Result<(LedgerStore, String)> {
    let user = match matches.get_one::<String>("user") {
        Some(u) => u.trim().to_string(),
        None => db::get_current_user(&conn)?
            .context("No user selected. Run `extrato user set <id>` or pass --user.")?,
    };
    let mut store = LedgerStore::new(Box::new(SqliteGateway::new(conn)));
    store.hydrate(&user)?;
    Ok((store, user))
}
