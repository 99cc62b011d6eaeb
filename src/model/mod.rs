//! The record types stored in the two CSV tables.

mod amount;
mod expense;
mod project;

pub use amount::{Amount, AmountError};
pub use expense::{Category, Expense, ReimbursementStatus};
pub use project::Project;

pub(crate) use expense::EXPENSE_COLUMNS;
pub(crate) use project::PROJECT_COLUMNS;
