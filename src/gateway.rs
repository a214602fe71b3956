// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::error::GatewayError;
use crate::models::{ChangeSet, Transaction, TransactionDraft};

/// Contract with the persistence collaborator. Any document-oriented
/// backend works; the ledger store only assumes these four operations.
/// Calls block until the backend settles, success or failure.
pub trait TransactionGateway {
    /// Full collection for one owner, newest-first by creation.
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, GatewayError>;

    /// Persists a draft, assigning the id and both timestamps.
    fn create_transaction(
        &self,
        user_id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction, GatewayError>;

    /// Applies a partial update and returns the refreshed `updated_at`.
    /// Field shapes are re-checked backend-side as a second line of defense.
    fn update_transaction(
        &self,
        id: &str,
        user_id: &str,
        changes: &ChangeSet,
    ) -> Result<DateTime<Utc>, GatewayError>;

    /// Deleting an unknown id is a failure, never a silent success.
    fn delete_transaction(&self, id: &str, user_id: &str) -> Result<(), GatewayError>;
}

/// Document-style persistence over sqlite, the backend the CLI ships with.
/// Ids are opaque hex digests minted per insert; timestamps are UTC RFC 3339.
pub struct SqliteGateway {
    conn: Connection,
}

impl SqliteGateway {
    pub fn new(conn: Connection) -> Self {
        SqliteGateway { conn }
    }
}

fn persist(e: rusqlite::Error) -> GatewayError {
    GatewayError::Persist(e.to_string())
}

fn fetch(e: rusqlite::Error) -> GatewayError {
    GatewayError::Fetch(e.to_string())
}

fn mint_id(user_id: &str, seq: i64, created_at: &DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(seq.to_be_bytes());
    hasher.update(created_at.to_rfc3339().as_bytes());
    hex::encode(hasher.finalize())[..16].to_string()
}

fn row_to_transaction(r: &rusqlite::Row<'_>) -> Result<Transaction, GatewayError> {
    let id: String = r.get(0).map_err(fetch)?;
    let user_id: String = r.get(1).map_err(fetch)?;
    let tx_type: String = r.get(2).map_err(fetch)?;
    let value: String = r.get(3).map_err(fetch)?;
    let category: String = r.get(4).map_err(fetch)?;
    let date: String = r.get(5).map_err(fetch)?;
    let created_at: String = r.get(6).map_err(fetch)?;
    let updated_at: String = r.get(7).map_err(fetch)?;

    let bad = |what: &str, raw: &str| {
        GatewayError::Fetch(format!("corrupt {} '{}' on transaction '{}'", what, raw, id))
    };
    Ok(Transaction {
        id: id.clone(),
        user_id,
        tx_type: tx_type.parse().map_err(|_| bad("type", &tx_type))?,
        value: value
            .parse::<Decimal>()
            .map_err(|_| bad("value", &value))?,
        category: category.parse().map_err(|_| bad("category", &category))?,
        date: chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| bad("date", &date))?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|_| bad("created_at", &created_at))?
            .with_timezone(&Utc),
        updated_at: DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|_| bad("updated_at", &updated_at))?
            .with_timezone(&Utc),
    })
}

impl TransactionGateway for SqliteGateway {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, GatewayError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, type, value, category, date, created_at, updated_at
                 FROM transactions WHERE user_id=?1
                 ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(fetch)?;
        let mut rows = stmt.query([user_id]).map_err(fetch)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(fetch)? {
            out.push(row_to_transaction(row)?);
        }
        Ok(out)
    }

    fn create_transaction(
        &self,
        user_id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction, GatewayError> {
        if user_id.trim().is_empty() {
            return Err(GatewayError::Persist("missing owner id".to_string()));
        }
        if draft.value <= Decimal::ZERO {
            return Err(GatewayError::Persist(format!(
                "rejected non-positive value '{}'",
                draft.value
            )));
        }
        let now = Utc::now();
        let seq: i64 = self
            .conn
            .query_row("SELECT IFNULL(MAX(rowid),0)+1 FROM transactions", [], |r| {
                r.get(0)
            })
            .map_err(persist)?;
        let id = mint_id(user_id, seq, &now);
        self.conn
            .execute(
                "INSERT INTO transactions(id, user_id, type, value, category, date, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    id,
                    user_id,
                    draft.tx_type.to_string(),
                    draft.value.to_string(),
                    draft.category.to_string(),
                    draft.date.to_string(),
                    now.to_rfc3339(),
                    now.to_rfc3339(),
                ],
            )
            .map_err(persist)?;
        Ok(Transaction::from_draft(
            draft.clone(),
            id,
            user_id.to_string(),
            now,
            now,
        ))
    }

    fn update_transaction(
        &self,
        id: &str,
        user_id: &str,
        changes: &ChangeSet,
    ) -> Result<DateTime<Utc>, GatewayError> {
        if let Some(v) = changes.value {
            if v <= Decimal::ZERO {
                return Err(GatewayError::Persist(format!(
                    "rejected non-positive value '{}'",
                    v
                )));
            }
        }
        let now = Utc::now();
        let mut sql = String::from("UPDATE transactions SET updated_at=?");
        let mut args: Vec<String> = vec![now.to_rfc3339()];
        if let Some(t) = changes.tx_type {
            sql.push_str(", type=?");
            args.push(t.to_string());
        }
        if let Some(v) = changes.value {
            sql.push_str(", value=?");
            args.push(v.to_string());
        }
        if let Some(c) = changes.category {
            sql.push_str(", category=?");
            args.push(c.to_string());
        }
        if let Some(d) = changes.date {
            sql.push_str(", date=?");
            args.push(d.to_string());
        }
        sql.push_str(" WHERE id=? AND user_id=?");
        args.push(id.to_string());
        args.push(user_id.to_string());

        let n = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(args))
            .map_err(persist)?;
        if n == 0 {
            return Err(GatewayError::Persist(format!(
                "transaction '{}' not found",
                id
            )));
        }
        Ok(now)
    }

    fn delete_transaction(&self, id: &str, user_id: &str) -> Result<(), GatewayError> {
        let n = self
            .conn
            .execute(
                "DELETE FROM transactions WHERE id=?1 AND user_id=?2",
                rusqlite::params![id, user_id],
            )
            .map_err(persist)?;
        if n == 0 {
            return Err(GatewayError::Persist(format!(
                "transaction '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
