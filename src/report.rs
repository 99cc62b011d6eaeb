//! The reporting view: read-only aggregation over the expense ledger.
//!
//! Both figures are recomputed from a fresh reload of the expenses table on every invocation.
//! There is no caching and no incremental state.

use crate::model::{Amount, Expense};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// The widest bar in the chart, in characters.
const BAR_WIDTH: usize = 40;

/// The aggregate view over the expense ledger: total spend per project reference and the total
/// amount not yet reimbursed.
///
/// Grouping is by the exact `project_ref` string, no normalization. Projects that share a short
/// code therefore merge into a single entry, which mirrors how the records were entered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    totals_by_project: BTreeMap<String, Amount>,
    unsettled_total: Amount,
}

impl Report {
    /// Builds the report, or `None` when there are no expense rows. An empty ledger is an
    /// explicit empty state, not a zero-valued chart.
    pub fn from_expenses(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut totals_by_project: BTreeMap<String, Amount> = BTreeMap::new();
        let mut unsettled_total = Amount::default();
        for expense in expenses {
            *totals_by_project
                .entry(expense.project_ref().to_string())
                .or_default() += expense.amount();
            if !expense.reimbursement_status().is_settled() {
                unsettled_total += expense.amount();
            }
        }

        Some(Self {
            totals_by_project,
            unsettled_total,
        })
    }

    pub fn totals_by_project(&self) -> &BTreeMap<String, Amount> {
        &self.totals_by_project
    }

    pub fn unsettled_total(&self) -> Amount {
        self.unsettled_total
    }

    /// Renders the totals as a text bar chart plus the unreimbursed metric.
    pub fn render(&self) -> String {
        let label_width = self
            .totals_by_project
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or_default();
        let max_total = self
            .totals_by_project
            .values()
            .copied()
            .max()
            .unwrap_or_default();

        let mut out = String::from("Spend by project:\n");
        for (project_ref, total) in &self.totals_by_project {
            let bar = "#".repeat(bar_length(*total, max_total));
            let _ = writeln!(
                out,
                "  {project_ref:<label_width$}  {bar:<BAR_WIDTH$}  {}",
                total.currency()
            );
        }
        let _ = write!(out, "\nUnreimbursed total: {}", self.unsettled_total.currency());
        out
    }
}

/// Scales `total` against the largest total so the widest bar is `BAR_WIDTH` characters. Any
/// positive total gets at least one character.
fn bar_length(total: Amount, max_total: Amount) -> usize {
    let total = total.value().to_f64().unwrap_or_default();
    let max_total = max_total.value().to_f64().unwrap_or_default();
    if total <= 0.0 || max_total <= 0.0 {
        return 0;
    }
    let scaled = (total / max_total * BAR_WIDTH as f64).round() as usize;
    scaled.clamp(1, BAR_WIDTH)
}
