//! Expense command handlers.

use crate::args::AddExpenseArgs;
use crate::commands::Out;
use crate::ledger::ExpenseLedger;
use crate::model::Expense;
use crate::registry::ProjectRegistry;
use crate::{Config, Result};
use anyhow::bail;
use std::fmt::Write;

/// Records a new expense in the expenses table.
///
/// Entry is blocked with a warning when no projects are registered, and the project reference
/// must be one of the registered short codes. Both checks are the CLI stand-in for the original
/// entry form's single-select picker; the storage layer itself enforces neither.
///
/// # Arguments
///
/// - `config` - The application configuration holding the table paths.
/// - `args` - The expense fields. `date` defaults to today, `category` to travel and `status`
///   to unsubmitted.
///
/// # Returns
///
/// On success, returns an `Out` containing a confirmation message and the recorded expense.
/// When entry is blocked because no projects exist, the `Out` carries the warning and no
/// structure, and nothing is written.
///
/// # Errors
///
/// - Returns an error if the amount is negative.
/// - Returns an error if the project reference is not a registered short code.
/// - Returns an error if a table cannot be loaded or written.
pub async fn expense_add(config: Config, args: AddExpenseArgs) -> Result<Out<Expense>> {
    if args.amount().is_negative() {
        bail!("The amount must not be negative");
    }

    let registry = ProjectRegistry::new(&config);
    let projects = registry.list().await?;
    if projects.is_empty() {
        return Ok(Out::new_message(
            "No projects are registered yet. Register at least one project with \
             'outlay project add' before recording expenses.",
        ));
    }

    if !projects.iter().any(|p| p.short_code() == args.project()) {
        let codes: Vec<&str> = projects.iter().map(|p| p.short_code()).collect();
        bail!(
            "Cannot record expense: project code '{}' is not registered. \
             Registered codes: {}",
            args.project(),
            codes.join(", ")
        );
    }

    let date = args
        .date()
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let expense = Expense::new(
        date,
        args.project(),
        args.amount(),
        args.category(),
        args.status(),
        args.note().unwrap_or_default(),
    );

    let ledger = ExpenseLedger::new(&config);
    ledger.add(expense.clone()).await?;

    let message = format!(
        "Recorded a {} {} expense of {} against {}",
        date,
        expense.category(),
        expense.amount().currency(),
        expense.project_ref()
    );
    Ok(Out::new(message, expense))
}

/// Lists all recorded expenses in insertion order.
pub async fn expense_list(config: Config) -> Result<Out<Vec<Expense>>> {
    let ledger = ExpenseLedger::new(&config);
    let expenses = ledger.list().await?;
    if expenses.is_empty() {
        return Ok(Out::new("No expenses recorded yet", expenses));
    }
    let message = render_listing(&expenses);
    Ok(Out::new(message, expenses))
}

fn render_listing(expenses: &[Expense]) -> String {
    let project_width = expenses
        .iter()
        .map(|e| e.project_ref().chars().count())
        .max()
        .unwrap_or_default()
        .max("PROJECT".len());
    let amount_width = expenses
        .iter()
        .map(|e| e.amount().currency().chars().count())
        .max()
        .unwrap_or_default()
        .max("AMOUNT".len());

    let mut out = format!(
        "{:<10}  {:<project_width$}  {:>amount_width$}  {:<11}  {:<11}  NOTE",
        "DATE", "PROJECT", "AMOUNT", "CATEGORY", "STATUS"
    );
    for expense in expenses {
        let _ = write!(
            out,
            "\n{:<10}  {:<project_width$}  {:>amount_width$}  {:<11}  {:<11}  {}",
            expense.date().to_string(),
            expense.project_ref(),
            expense.amount().currency(),
            expense.category().to_string(),
            expense.reimbursement_status().to_string(),
            expense.note()
        );
    }
    out
}
