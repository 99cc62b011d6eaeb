//! Expense rows and their two fixed enumerations.

use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single row from the expenses table.
///
/// `project_ref` holds a project short code as free text. The selection of an existing code
/// happens at entry time in the shell; storage imposes no referential constraint.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    pub(crate) date: NaiveDate,
    pub(crate) project_ref: String,
    pub(crate) amount: Amount,
    pub(crate) category: Category,
    pub(crate) reimbursement_status: ReimbursementStatus,
    pub(crate) note: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        project_ref: impl Into<String>,
        amount: Amount,
        category: Category,
        reimbursement_status: ReimbursementStatus,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            project_ref: project_ref.into(),
            amount,
            category,
            reimbursement_status,
            note: note.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn project_ref(&self) -> &str {
        &self.project_ref
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn reimbursement_status(&self) -> ReimbursementStatus {
        self.reimbursement_status
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

/// The exact header of the expenses table, in column order.
pub(crate) const EXPENSE_COLUMNS: &[&str] = &[
    "date",
    "project_ref",
    "amount",
    "category",
    "reimbursement_status",
    "note",
];

/// The fixed set of expense categories.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Travel,
    Hospitality,
    Materials,
    Labor,
    Other,
}

serde_plain::derive_display_from_serialize!(Category);
serde_plain::derive_fromstr_from_deserialize!(Category);

/// The reimbursement lifecycle of an expense: unsubmitted -> in-progress -> settled.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReimbursementStatus {
    #[default]
    Unsubmitted,
    InProgress,
    Settled,
}

serde_plain::derive_display_from_serialize!(ReimbursementStatus);
serde_plain::derive_fromstr_from_deserialize!(ReimbursementStatus);

impl ReimbursementStatus {
    /// True once the expense has been repaid. Everything else counts toward the unsettled total.
    pub fn is_settled(&self) -> bool {
        matches!(self, ReimbursementStatus::Settled)
    }
}
