// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::db;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim().to_string();
            db::set_current_user(conn, &id)?;
            println!("Current user set to '{}'", id);
        }
        Some(("show", _)) => match db::get_current_user(conn)? {
            Some(user) => println!("{}", user),
            None => println!("No user selected. Run `extrato user set <id>`."),
        },
        _ => {}
    }
    Ok(())
}
