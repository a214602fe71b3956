// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::{debug, warn};

use crate::error::{LedgerError, ValidationError};
use crate::filter::{self, FilterCriteria};
use crate::gateway::TransactionGateway;
use crate::models::{LedgerEntry, TransactionDraft, TransactionPatch};
use crate::reports::{self, CategorySlice, Summary};
use crate::statement::{self, MonthBucket};

/// The authoritative in-memory ledger for one owner.
///
/// All mutations delegate to the persistence collaborator and reconcile the
/// local collection with the confirmed result. Every operation either fully
/// applies or fully does not; the one deliberate exception is `create`,
/// which keeps the optimistic entry around as `Pending` when the
/// collaborator fails, so user input is never dropped.
///
/// Operations take `&mut self` and run to completion, so two mutations can
/// never overlap; back-to-back mutations on the same id resolve in arrival
/// order (last writer wins).
pub struct LedgerStore {
    gateway: Box<dyn TransactionGateway>,
    entries: Vec<LedgerEntry>,
    user_id: Option<String>,
    loading: bool,
    last_error: Option<String>,
}

impl LedgerStore {
    pub fn new(gateway: Box<dyn TransactionGateway>) -> Self {
        LedgerStore {
            gateway,
            entries: Vec::new(),
            user_id: None,
            loading: false,
            last_error: None,
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces local state with the owner's remote collection. On failure
    /// the prior entries stay untouched and the error is recorded.
    pub fn hydrate(&mut self, user_id: &str) -> Result<(), LedgerError> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user id").into());
        }
        self.loading = true;
        self.last_error = None;
        match self.gateway.list_transactions(user_id) {
            Ok(list) => {
                debug!("hydrated {} transactions for '{}'", list.len(), user_id);
                self.entries = list.into_iter().map(LedgerEntry::Confirmed).collect();
                self.user_id = Some(user_id.to_string());
                self.loading = false;
                Ok(())
            }
            Err(e) => {
                warn!("hydrate failed for '{}': {}", user_id, e);
                self.loading = false;
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Optimistically inserts the draft at the head of the ledger, then
    /// asks the collaborator to persist it. On success the pending slot is
    /// replaced in place by the confirmed transaction; on failure the
    /// pending entry is retained and the error recorded, so the input
    /// survives locally until the next successful sync.
    pub fn create(
        &mut self,
        user_id: &str,
        draft: TransactionDraft,
    ) -> Result<&LedgerEntry, LedgerError> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user id").into());
        }
        self.entries.insert(0, LedgerEntry::Pending(draft.clone()));
        self.loading = true;
        self.last_error = None;
        let outcome = self.gateway.create_transaction(user_id, &draft);
        self.loading = false;
        match outcome {
            Ok(tx) => {
                debug!("confirmed transaction '{}' for '{}'", tx.id, user_id);
                self.entries[0] = LedgerEntry::Confirmed(tx);
                Ok(&self.entries[0])
            }
            Err(e) => {
                warn!("create failed for '{}', keeping pending entry: {}", user_id, e);
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Validates the patch locally (no collaborator call on rejection),
    /// updates the remote copy first, and only merges into the local entry
    /// once the collaborator confirms. Displayed numbers therefore never
    /// show an edit the backend refused.
    pub fn update(
        &mut self,
        id: &str,
        user_id: &str,
        patch: &TransactionPatch,
    ) -> Result<(), LedgerError> {
        if id.trim().is_empty() {
            return Err(ValidationError::MissingField("transaction id").into());
        }
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user id").into());
        }
        let changes = patch.changes()?;
        self.loading = true;
        self.last_error = None;
        let outcome = self.gateway.update_transaction(id, user_id, &changes);
        self.loading = false;
        match outcome {
            Ok(updated_at) => {
                if let Some(LedgerEntry::Confirmed(tx)) = self
                    .entries
                    .iter_mut()
                    .find(|e| e.id() == Some(id))
                {
                    changes.apply_to(tx);
                    tx.updated_at = updated_at;
                }
                Ok(())
            }
            Err(e) => {
                warn!("update of '{}' failed: {}", id, e);
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Removes remotely first, then locally. A remote failure leaves the
    /// local entry in place; an id unknown locally is still delegated, the
    /// collaborator owns the authoritative collection.
    pub fn delete(&mut self, id: &str, user_id: &str) -> Result<(), LedgerError> {
        if id.trim().is_empty() {
            return Err(ValidationError::MissingField("transaction id").into());
        }
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user id").into());
        }
        self.loading = true;
        self.last_error = None;
        let outcome = self.gateway.delete_transaction(id, user_id);
        self.loading = false;
        match outcome {
            Ok(()) => {
                self.entries.retain(|e| e.id() != Some(id));
                Ok(())
            }
            Err(e) => {
                warn!("delete of '{}' failed: {}", id, e);
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Wipes all ledger state. Invoked when the owning session ends.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.user_id = None;
        self.loading = false;
        self.last_error = None;
    }

    // Derived read views. Recomputed per read; a single user's history is
    // small enough that caching across mutations is not worth the staleness
    // bookkeeping.

    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<LedgerEntry> {
        filter::apply(&self.entries, criteria)
    }

    pub fn statement(&self, criteria: &FilterCriteria) -> Vec<MonthBucket> {
        statement::group_by_month(&self.filtered(criteria))
    }

    pub fn summary(&self) -> Summary {
        reports::summarize(&self.entries)
    }

    pub fn category_breakdown(&self) -> Vec<CategorySlice> {
        reports::category_breakdown(&self.entries)
    }
}
