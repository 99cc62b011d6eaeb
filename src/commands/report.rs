//! Report command handler.

use crate::commands::Out;
use crate::ledger::ExpenseLedger;
use crate::{Config, Report, Result};

/// Renders the reporting view: total spend per project as a text bar chart, plus the
/// unreimbursed total as a currency metric.
///
/// The figures are recomputed from a full reload of the expenses table; nothing is cached. An
/// empty ledger yields an explicit empty-state message rather than a zero-valued chart.
pub async fn report(config: Config) -> Result<Out<Report>> {
    let ledger = ExpenseLedger::new(&config);
    let expenses = ledger.list().await?;

    match Report::from_expenses(&expenses) {
        Some(report) => {
            let message = report.render();
            Ok(Out::new(message, report))
        }
        None => Ok(Out::new_message(
            "No expense data yet; there is nothing to report.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddExpenseArgs;
    use crate::commands::expense_add;
    use crate::model::{Amount, Category, ReimbursementStatus};
    use crate::test::TestEnv;
    use chrono::NaiveDate;
    use std::str::FromStr;

    async fn add(env: &TestEnv, project: &str, amount: &str, status: ReimbursementStatus) {
        let args = AddExpenseArgs::new(
            NaiveDate::from_ymd_opt(2026, 8, 25),
            project,
            Amount::from_str(amount).unwrap(),
            Category::Other,
            status,
            None,
        );
        expense_add(env.config(), args).await.unwrap();
    }

    #[tokio::test]
    async fn test_report_totals_and_unsettled() {
        let env = TestEnv::new().await;
        env.add_project("Project A", "A", "0").await;
        env.add_project("Project B", "B", "0").await;
        add(&env, "A", "100", ReimbursementStatus::Settled).await;
        add(&env, "A", "50", ReimbursementStatus::Unsubmitted).await;
        add(&env, "B", "30", ReimbursementStatus::InProgress).await;

        let out = report(env.config()).await.unwrap();
        let result = out.structure().unwrap();
        assert_eq!(
            result.totals_by_project()["A"],
            Amount::from_str("150").unwrap()
        );
        assert_eq!(
            result.totals_by_project()["B"],
            Amount::from_str("30").unwrap()
        );
        assert_eq!(result.unsettled_total(), Amount::from_str("80").unwrap());
        assert!(out.message().contains("Unreimbursed total: $80.00"));
    }

    #[tokio::test]
    async fn test_report_empty_state() {
        let env = TestEnv::new().await;
        let out = report(env.config()).await.unwrap();
        assert!(out.message().contains("nothing to report"));
        assert!(out.structure().is_none());
    }
}
