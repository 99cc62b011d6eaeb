//! The expense ledger: a list/add view over the expenses table.

use crate::model::Expense;
use crate::store::TableStore;
use crate::{Config, Result};

/// Lists and appends expense records. Like the project registry, the table is append-only;
/// there are no update or delete operations.
///
/// The ledger itself does not validate `project_ref`. The no-projects precondition and the
/// restriction of `project_ref` to registered short codes both live in the command layer, the
/// way the original entry form constrained its inputs.
#[derive(Debug, Clone)]
pub struct ExpenseLedger {
    store: TableStore<Expense>,
}

impl ExpenseLedger {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TableStore::new(config.expenses_path()),
        }
    }

    /// Returns all expenses in insertion order, reloaded from storage.
    pub async fn list(&self) -> Result<Vec<Expense>> {
        self.store.load().await
    }

    /// Appends an expense and rewrites the whole table.
    pub async fn add(&self, expense: Expense) -> Result<()> {
        let mut expenses = self.store.load().await?;
        expenses.push(expense);
        self.store.save(&expenses).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Category, ReimbursementStatus};
    use crate::test::TestEnv;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn expense(day: u32, project: &str, amount: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            project,
            Amount::from_str(amount).unwrap(),
            Category::Other,
            ReimbursementStatus::Unsubmitted,
            "",
        )
    }

    #[tokio::test]
    async fn test_add_then_list_preserves_call_order() {
        let env = TestEnv::new().await;
        let ledger = ExpenseLedger::new(&env.config());
        ledger.add(expense(1, "ALW", "10")).await.unwrap();
        ledger.add(expense(2, "BTL", "20")).await.unwrap();
        ledger.add(expense(3, "ALW", "30")).await.unwrap();

        let listed = ledger.list().await.unwrap();
        let days: Vec<u32> = listed
            .iter()
            .map(|e| chrono::Datelike::day(&e.date()))
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reload_after_restart_is_identical() {
        let env = TestEnv::new().await;
        let ledger = ExpenseLedger::new(&env.config());
        ledger.add(expense(1, "ALW", "10")).await.unwrap();
        ledger.add(expense(2, "BTL", "20.50")).await.unwrap();
        let before = ledger.list().await.unwrap();

        let restarted = ExpenseLedger::new(&env.config());
        let after = restarted.list().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_empty_ledger_lists_empty() {
        let env = TestEnv::new().await;
        let ledger = ExpenseLedger::new(&env.config());
        assert!(ledger.list().await.unwrap().is_empty());
    }
}
