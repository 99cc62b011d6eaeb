//! Project command handlers.

use crate::args::AddProjectArgs;
use crate::commands::Out;
use crate::model::Project;
use crate::registry::{AddOutcome, ProjectRegistry};
use crate::{Config, Result};
use anyhow::bail;
use std::fmt::Write;
use tracing::debug;

/// Registers a new project in the projects table.
///
/// A submission with an empty name or an empty short code is silently dropped, matching the
/// original entry form: no row is written, no error is raised, and no success message is shown.
/// Short codes are not checked for uniqueness; registering the same code twice keeps both rows.
///
/// # Arguments
///
/// - `config` - The application configuration holding the table paths.
/// - `args` - The project fields. `contract` defaults to 0.
///
/// # Returns
///
/// On a successful save, returns an `Out` containing a confirmation message and the saved
/// project. On a silent skip the `Out` carries no message and no structure.
///
/// # Errors
///
/// - Returns an error if the contract amount is negative.
/// - Returns an error if the table cannot be loaded or written.
pub async fn project_add(config: Config, args: AddProjectArgs) -> Result<Out<Project>> {
    if args.contract().is_negative() {
        bail!("The contract amount must not be negative");
    }

    let project = Project::new(args.name(), args.code(), args.contract());
    let registry = ProjectRegistry::new(&config);
    match registry.add(project.clone()).await? {
        AddOutcome::Saved => {
            let message = format!("Project {} saved", project.short_code());
            Ok(Out::new(message, project))
        }
        AddOutcome::Skipped => {
            debug!("Project not saved: --name and --code must both be non-empty");
            Ok(Out::new_message(String::new()))
        }
    }
}

/// Lists all registered projects in insertion order.
pub async fn project_list(config: Config) -> Result<Out<Vec<Project>>> {
    let registry = ProjectRegistry::new(&config);
    let projects = registry.list().await?;
    if projects.is_empty() {
        return Ok(Out::new("No projects registered yet", projects));
    }
    let message = render_listing(&projects);
    Ok(Out::new(message, projects))
}

fn render_listing(projects: &[Project]) -> String {
    let code_width = projects
        .iter()
        .map(|p| p.short_code().chars().count())
        .max()
        .unwrap_or_default()
        .max("CODE".len());
    let contract_width = projects
        .iter()
        .map(|p| p.contract_amount().currency().chars().count())
        .max()
        .unwrap_or_default()
        .max("CONTRACT".len());

    let mut out = format!("{:<code_width$}  {:>contract_width$}  NAME", "CODE", "CONTRACT");
    for project in projects {
        let _ = write!(
            out,
            "\n{:<code_width$}  {:>contract_width$}  {}",
            project.short_code(),
            project.contract_amount().currency(),
            project.project_name()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_project_add_success() {
        let env = TestEnv::new().await;
        let args = AddProjectArgs::new("Alpha Works", "ALW", Amount::from_str("1000").unwrap());

        let out = project_add(env.config(), args).await.unwrap();

        assert!(out.message().contains("Project ALW saved"));
        let saved = out.structure().unwrap();
        assert_eq!(saved.project_name(), "Alpha Works");

        let listed = project_list(env.config()).await.unwrap();
        assert_eq!(listed.structure().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_project_add_empty_name_is_silent() {
        let env = TestEnv::new().await;
        let args = AddProjectArgs::new("", "ALW", Amount::default());

        let out = project_add(env.config(), args).await.unwrap();

        // No success indicator, no stored row.
        assert!(out.message().is_empty());
        assert!(out.structure().is_none());
        assert!(project_list(env.config())
            .await
            .unwrap()
            .structure()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_project_add_negative_contract_is_rejected() {
        let env = TestEnv::new().await;
        let args = AddProjectArgs::new("Alpha Works", "ALW", Amount::from_str("-5").unwrap());
        let err = project_add(env.config(), args).await.unwrap_err().to_string();
        assert!(err.contains("must not be negative"), "got: {err}");
    }

    #[tokio::test]
    async fn test_project_list_empty_message() {
        let env = TestEnv::new().await;
        let out = project_list(env.config()).await.unwrap();
        assert!(out.message().contains("No projects registered yet"));
    }

    #[tokio::test]
    async fn test_project_list_renders_all_rows() {
        let env = TestEnv::new().await;
        env.add_project("Alpha Works", "ALW", "1000").await;
        env.add_project("Beta Line", "BTL", "25000").await;

        let out = project_list(env.config()).await.unwrap();
        assert!(out.message().contains("ALW"));
        assert!(out.message().contains("$25,000.00"));
        assert!(out.message().contains("Beta Line"));
    }
}
