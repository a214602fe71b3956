// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::utils::{parse_date, parse_decimal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl FromStr for TransactionType {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(TransactionType::Income),
            "expense" | "despesa" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::InvalidType(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// Closed category set. The statement chart assigns a fixed palette per
/// category, so unknown labels are rejected at ingestion rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Housing,
    Health,
    Education,
    Transport,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Housing,
        Category::Health,
        Category::Education,
        Category::Transport,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Transport => "Transport",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" | "alimentação" => Ok(Category::Food),
            "housing" | "moradia" => Ok(Category::Housing),
            "health" | "saúde" => Ok(Category::Health),
            "education" | "estudo" => Ok(Category::Education),
            "transport" | "transporte" => Ok(Category::Transport),
            _ => Err(ValidationError::InvalidCategory(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A normalized transaction candidate: validated fields only, no id, owner
/// or timestamps. Those are assigned by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub tx_type: TransactionType,
    pub value: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Normalizes raw field text from a form or a CSV row into a draft.
    /// The manual-entry and bulk-import paths share these rules, in this
    /// order: type, value, category, date. A zero or negative value is
    /// rejected; direction is carried by the type, not the sign.
    pub fn from_raw(
        raw_type: &str,
        raw_category: &str,
        raw_value: &str,
        raw_date: &str,
    ) -> Result<Self, ValidationError> {
        let tx_type: TransactionType = raw_type.parse()?;
        let value = parse_decimal(raw_value)?;
        if value <= Decimal::ZERO {
            return Err(ValidationError::InvalidValue(raw_value.trim().to_string()));
        }
        let category: Category = raw_category.parse()?;
        let date = parse_date(raw_date)?;
        Ok(TransactionDraft {
            tx_type,
            value,
            category,
            date,
        })
    }
}

/// A transaction confirmed by the persistence collaborator. `created_at`
/// and `updated_at` drive default ordering only, never business logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub tx_type: TransactionType,
    pub value: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_draft(
        draft: TransactionDraft,
        id: String,
        user_id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Transaction {
            id,
            user_id,
            tx_type: draft.tx_type,
            value: draft.value,
            category: draft.category,
            date: draft.date,
            created_at,
            updated_at,
        }
    }
}

/// One ledger slot. A freshly created transaction sits in the ledger as
/// `Pending` until the collaborator confirms it, at which point the slot is
/// replaced in place by `Confirmed` with the assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LedgerEntry {
    Pending(TransactionDraft),
    Confirmed(Transaction),
}

impl LedgerEntry {
    pub fn tx_type(&self) -> TransactionType {
        match self {
            LedgerEntry::Pending(d) => d.tx_type,
            LedgerEntry::Confirmed(t) => t.tx_type,
        }
    }

    pub fn value(&self) -> Decimal {
        match self {
            LedgerEntry::Pending(d) => d.value,
            LedgerEntry::Confirmed(t) => t.value,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            LedgerEntry::Pending(d) => d.category,
            LedgerEntry::Confirmed(t) => t.category,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            LedgerEntry::Pending(d) => d.date,
            LedgerEntry::Confirmed(t) => t.date,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            LedgerEntry::Pending(_) => None,
            LedgerEntry::Confirmed(t) => Some(&t.id),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LedgerEntry::Pending(_))
    }
}

/// Partial update payload as it arrives from the edit form: raw text per
/// field, absent fields untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub tx_type: Option<String>,
    pub value: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.tx_type.is_none()
            && self.value.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// Validates every provided field with the same rules as
    /// [`TransactionDraft::from_raw`] and produces a typed change set.
    /// An all-absent patch is rejected before any remote call happens.
    pub fn changes(&self) -> Result<ChangeSet, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        let tx_type = match &self.tx_type {
            Some(raw) => Some(raw.parse::<TransactionType>()?),
            None => None,
        };
        let value = match &self.value {
            Some(raw) => {
                let v = parse_decimal(raw)?;
                if v <= Decimal::ZERO {
                    return Err(ValidationError::InvalidValue(raw.trim().to_string()));
                }
                Some(v)
            }
            None => None,
        };
        let category = match &self.category {
            Some(raw) => Some(raw.parse::<Category>()?),
            None => None,
        };
        let date = match &self.date {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        Ok(ChangeSet {
            tx_type,
            value,
            category,
            date,
        })
    }
}

/// A validated partial update, ready for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSet {
    pub tx_type: Option<TransactionType>,
    pub value: Option<Decimal>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl ChangeSet {
    pub fn apply_to(&self, tx: &mut Transaction) {
        if let Some(t) = self.tx_type {
            tx.tx_type = t;
        }
        if let Some(v) = self.value {
            tx.value = v;
        }
        if let Some(c) = self.category {
            tx.category = c;
        }
        if let Some(d) = self.date {
            tx.date = d;
        }
    }
}
