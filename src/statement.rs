// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::models::LedgerEntry;
use crate::utils::month_label;

/// One calendar month of the statement, labelled like `January 2024`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub label: String,
    pub entries: Vec<LedgerEntry>,
}

/// Groups entries by calendar month. Buckets appear in first-occurrence
/// order of the input (newest-first input yields newest-month-first
/// buckets) and each bucket keeps the incoming order of its entries.
pub fn group_by_month(entries: &[LedgerEntry]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    for entry in entries {
        let label = month_label(entry.date());
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.entries.push(entry.clone()),
            None => buckets.push(MonthBucket {
                label,
                entries: vec![entry.clone()],
            }),
        }
    }
    buckets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PagerState {
    Idle,
    Loading,
    Exhausted,
}

/// Load-more window over an already-filtered statement. The underlying
/// collection is fully loaded client-side; extending the window only
/// reveals more of it, never refetches.
#[derive(Debug, Clone)]
pub struct StatementPager {
    initial: usize,
    increment: usize,
    shown: usize,
    total: usize,
    state: PagerState,
}

impl StatementPager {
    pub fn new(initial_page_size: usize, page_increment: usize) -> Self {
        StatementPager {
            initial: initial_page_size,
            increment: page_increment,
            shown: 0,
            total: 0,
            state: PagerState::Exhausted,
        }
    }

    /// Called whenever the filter criteria change: the window snaps back to
    /// the first `initial_page_size` items of the new filtered set.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.shown = self.initial.min(total);
        self.state = if self.shown < total {
            PagerState::Idle
        } else {
            PagerState::Exhausted
        };
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.total
    }

    /// Begins a window extension. Returns false while one is already in
    /// flight or the window already covers the filtered set, so repeated
    /// invocations cannot double-extend.
    pub fn start_load(&mut self) -> bool {
        if self.state != PagerState::Idle {
            return false;
        }
        self.state = PagerState::Loading;
        true
    }

    /// Completes a started extension, growing the window by the page
    /// increment and settling back to `Idle` or `Exhausted`.
    pub fn finish_load(&mut self) {
        if self.state != PagerState::Loading {
            return;
        }
        self.shown = (self.shown + self.increment).min(self.total);
        self.state = if self.shown < self.total {
            PagerState::Idle
        } else {
            PagerState::Exhausted
        };
    }

    /// One load-more press. Returns whether the window grew.
    pub fn load_more(&mut self) -> bool {
        if !self.start_load() {
            return false;
        }
        let before = self.shown;
        self.finish_load();
        self.shown > before
    }

    /// The revealed prefix of the filtered statement.
    pub fn window<'a>(&self, entries: &'a [LedgerEntry]) -> &'a [LedgerEntry] {
        &entries[..self.shown.min(entries.len())]
    }
}
