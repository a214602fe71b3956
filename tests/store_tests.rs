// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use extrato::error::{GatewayError, LedgerError, ValidationError};
use extrato::gateway::TransactionGateway;
use extrato::models::{ChangeSet, Transaction, TransactionDraft, TransactionPatch};
use extrato::store::LedgerStore;

#[derive(Default)]
struct Remote {
    docs: Vec<Transaction>, // newest-first, like the backend returns them
    calls: usize,
    next_id: usize,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
}

#[derive(Clone, Default)]
struct MemoryGateway {
    remote: Rc<RefCell<Remote>>,
}

impl MemoryGateway {
    fn calls(&self) -> usize {
        self.remote.borrow().calls
    }

    fn doc_value(&self, id: &str) -> Option<String> {
        self.remote
            .borrow()
            .docs
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.value.to_string())
    }
}

impl TransactionGateway for MemoryGateway {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, GatewayError> {
        let mut r = self.remote.borrow_mut();
        r.calls += 1;
        if r.fail_list {
            return Err(GatewayError::Fetch("backend offline".to_string()));
        }
        Ok(r.docs
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    fn create_transaction(
        &self,
        user_id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction, GatewayError> {
        let mut r = self.remote.borrow_mut();
        r.calls += 1;
        if r.fail_create {
            return Err(GatewayError::Persist("backend offline".to_string()));
        }
        r.next_id += 1;
        let now = Utc::now();
        let tx = Transaction::from_draft(
            draft.clone(),
            format!("t{}", r.next_id),
            user_id.to_string(),
            now,
            now,
        );
        r.docs.insert(0, tx.clone());
        Ok(tx)
    }

    fn update_transaction(
        &self,
        id: &str,
        user_id: &str,
        changes: &ChangeSet,
    ) -> Result<chrono::DateTime<Utc>, GatewayError> {
        let mut r = self.remote.borrow_mut();
        r.calls += 1;
        if r.fail_update {
            return Err(GatewayError::Persist("backend offline".to_string()));
        }
        let now = Utc::now();
        match r
            .docs
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id)
        {
            Some(tx) => {
                changes.apply_to(tx);
                tx.updated_at = now;
                Ok(now)
            }
            None => Err(GatewayError::Persist(format!(
                "transaction '{}' not found",
                id
            ))),
        }
    }

    fn delete_transaction(&self, id: &str, user_id: &str) -> Result<(), GatewayError> {
        let mut r = self.remote.borrow_mut();
        r.calls += 1;
        if r.fail_delete {
            return Err(GatewayError::Persist("backend offline".to_string()));
        }
        let before = r.docs.len();
        r.docs.retain(|t| !(t.id == id && t.user_id == user_id));
        if r.docs.len() == before {
            return Err(GatewayError::Persist(format!(
                "transaction '{}' not found",
                id
            )));
        }
        Ok(())
    }
}

fn draft(tx_type: &str, value: &str, category: &str, date: &str) -> TransactionDraft {
    TransactionDraft::from_raw(tx_type, category, value, date).unwrap()
}

fn seeded_store() -> (LedgerStore, MemoryGateway) {
    let gateway = MemoryGateway::default();
    let mut store = LedgerStore::new(Box::new(gateway.clone()));
    store
        .create("u1", draft("income", "1500.00", "Food", "2024-01-15"))
        .unwrap();
    store
        .create("u1", draft("expense", "200.50", "Transport", "2024-02-01"))
        .unwrap();
    (store, gateway)
}

#[test]
fn hydrate_replaces_state_newest_first() {
    let (_, gateway) = seeded_store();
    let mut store = LedgerStore::new(Box::new(gateway));
    store.hydrate("u1").unwrap();
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.entries()[0].value().to_string(), "200.50");
    assert!(store.entries().iter().all(|e| !e.is_pending()));
    assert_eq!(store.user_id(), Some("u1"));
    assert!(store.last_error().is_none());
}

#[test]
fn hydrate_failure_keeps_prior_state() {
    let (mut store, gateway) = seeded_store();
    store.hydrate("u1").unwrap();
    gateway.remote.borrow_mut().fail_list = true;

    let err = store.hydrate("u1").unwrap_err();
    assert!(matches!(err, LedgerError::Gateway(GatewayError::Fetch(_))));
    assert_eq!(store.entries().len(), 2);
    assert!(store.last_error().unwrap().contains("backend offline"));
}

#[test]
fn create_confirms_the_optimistic_entry_in_place() {
    let (mut store, _) = seeded_store();
    let entry = store
        .create("u1", draft("expense", "80", "Housing", "2024-03-05"))
        .unwrap();
    assert!(!entry.is_pending());
    assert_eq!(entry.id(), Some("t3"));
    assert_eq!(store.entries().len(), 3);
    // head position, older entries untouched behind it
    assert_eq!(store.entries()[0].id(), Some("t3"));
    assert_eq!(store.entries()[1].id(), Some("t2"));
}

#[test]
fn failed_create_retains_the_pending_entry() {
    let (mut store, gateway) = seeded_store();
    gateway.remote.borrow_mut().fail_create = true;

    let err = store
        .create("u1", draft("expense", "80", "Housing", "2024-03-05"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::Gateway(GatewayError::Persist(_))));
    assert_eq!(store.entries().len(), 3);
    assert!(store.entries()[0].is_pending());
    assert_eq!(store.entries()[0].value().to_string(), "80");
    assert!(store.last_error().is_some());
}

#[test]
fn empty_patch_is_rejected_without_a_remote_call() {
    let (mut store, gateway) = seeded_store();
    let calls_before = gateway.calls();

    let err = store
        .update("t1", "u1", &TransactionPatch::default())
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Validation(ValidationError::EmptyUpdate)
    );
    assert_eq!(gateway.calls(), calls_before);
}

#[test]
fn invalid_patch_field_is_rejected_without_a_remote_call() {
    let (mut store, gateway) = seeded_store();
    let calls_before = gateway.calls();

    let patch = TransactionPatch {
        category: Some("Lazer".to_string()),
        ..Default::default()
    };
    let err = store.update("t1", "u1", &patch).unwrap_err();
    assert_eq!(
        err,
        LedgerError::Validation(ValidationError::InvalidCategory("Lazer".to_string()))
    );
    assert_eq!(gateway.calls(), calls_before);
}

#[test]
fn missing_id_or_user_is_rejected_without_a_remote_call() {
    let (mut store, gateway) = seeded_store();
    let calls_before = gateway.calls();

    let patch = TransactionPatch {
        value: Some("10".to_string()),
        ..Default::default()
    };
    assert!(store.update("", "u1", &patch).is_err());
    assert!(store.update("t1", "  ", &patch).is_err());
    assert!(store.delete(" ", "u1").is_err());
    assert_eq!(gateway.calls(), calls_before);
}

#[test]
fn update_merges_only_after_remote_confirmation() {
    let (mut store, gateway) = seeded_store();
    let patch = TransactionPatch {
        value: Some("250,00".to_string()),
        ..Default::default()
    };
    store.update("t2", "u1", &patch).unwrap();
    assert_eq!(store.entries()[0].value().to_string(), "250.00");
    assert_eq!(gateway.doc_value("t2").unwrap(), "250.00");
}

#[test]
fn failed_update_leaves_local_state_untouched() {
    let (mut store, gateway) = seeded_store();
    gateway.remote.borrow_mut().fail_update = true;

    let patch = TransactionPatch {
        value: Some("999".to_string()),
        ..Default::default()
    };
    assert!(store.update("t2", "u1", &patch).is_err());
    assert_eq!(store.entries()[0].value().to_string(), "200.50");
    assert!(store.last_error().is_some());
}

#[test]
fn back_to_back_updates_resolve_last_writer_wins() {
    let (mut store, gateway) = seeded_store();
    let first = TransactionPatch {
        value: Some("300".to_string()),
        ..Default::default()
    };
    let second = TransactionPatch {
        value: Some("400".to_string()),
        ..Default::default()
    };
    store.update("t2", "u1", &first).unwrap();
    store.update("t2", "u1", &second).unwrap();
    assert_eq!(store.entries()[0].value().to_string(), "400");
    assert_eq!(gateway.doc_value("t2").unwrap(), "400");
}

#[test]
fn delete_removes_locally_only_after_remote_success() {
    let (mut store, _) = seeded_store();
    store.delete("t2", "u1").unwrap();
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].id(), Some("t1"));
}

#[test]
fn failed_delete_retains_the_entry() {
    let (mut store, gateway) = seeded_store();
    gateway.remote.borrow_mut().fail_delete = true;

    assert!(store.delete("t2", "u1").is_err());
    assert_eq!(store.entries().len(), 2);
    assert!(store.last_error().is_some());
}

#[test]
fn delete_of_locally_absent_id_is_still_delegated() {
    let (mut store, gateway) = seeded_store();
    let calls_before = gateway.calls();

    let err = store.delete("ghost", "u1").unwrap_err();
    assert!(matches!(err, LedgerError::Gateway(GatewayError::Persist(_))));
    // the collaborator was consulted, and local state did not change
    assert_eq!(gateway.calls(), calls_before + 1);
    assert_eq!(store.entries().len(), 2);
}

#[test]
fn clear_wipes_everything() {
    let (mut store, _) = seeded_store();
    store.clear();
    assert!(store.entries().is_empty());
    assert_eq!(store.user_id(), None);
    assert!(store.last_error().is_none());
    assert!(!store.is_loading());
}

#[test]
fn derived_views_compose_over_current_entries() {
    let (mut store, _) = seeded_store();
    store
        .create("u1", draft("expense", "80", "Food", "2024-02-15"))
        .unwrap();

    let summary = store.summary();
    assert_eq!(summary.income.to_string(), "1500.00");
    assert_eq!(summary.expense.to_string(), "280.50");
    assert_eq!(summary.balance.to_string(), "1219.50");

    let buckets = store.statement(&Default::default());
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["February 2024", "January 2024"]);

    let slices = store.category_breakdown();
    assert_eq!(slices.len(), 2);
}
