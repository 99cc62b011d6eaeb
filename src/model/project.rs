use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// Represents a single row from the projects table.
///
/// A project is a registered budget line: a full title, the short code that expense rows
/// reference, and the contract ceiling. Nothing enforces short-code uniqueness; two projects
/// registered with the same code are both kept.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    pub(crate) project_name: String,
    pub(crate) short_code: String,
    pub(crate) contract_amount: Amount,
}

impl Project {
    pub fn new(
        project_name: impl Into<String>,
        short_code: impl Into<String>,
        contract_amount: Amount,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            short_code: short_code.into(),
            contract_amount,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn contract_amount(&self) -> Amount {
        self.contract_amount
    }
}

/// The exact header of the projects table, in column order.
pub(crate) const PROJECT_COLUMNS: &[&str] = &["project_name", "short_code", "contract_amount"];
