//! The project registry: a list/add view over the projects table.

use crate::model::Project;
use crate::store::TableStore;
use crate::{Config, Result};
use tracing::debug;

/// The outcome of an add: either the table was rewritten with the new record, or the record was
/// silently dropped because a required field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Saved,
    Skipped,
}

/// Lists and appends project records. There are no update or delete operations; the table only
/// ever grows.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    store: TableStore<Project>,
}

impl ProjectRegistry {
    pub fn new(config: &Config) -> Self {
        Self {
            store: TableStore::new(config.projects_path()),
        }
    }

    /// Returns all projects in insertion order, reloaded from storage.
    pub async fn list(&self) -> Result<Vec<Project>> {
        self.store.load().await
    }

    /// Appends a project and rewrites the whole table.
    ///
    /// A project with an empty name or an empty short code is dropped without touching storage
    /// and without an error; the caller sees `AddOutcome::Skipped` instead of a success.
    /// Short codes are not checked for uniqueness.
    pub async fn add(&self, project: Project) -> Result<AddOutcome> {
        if project.project_name().is_empty() || project.short_code().is_empty() {
            debug!("Project not saved: the name and short code are both required");
            return Ok(AddOutcome::Skipped);
        }
        let mut projects = self.store.load().await?;
        projects.push(project);
        self.store.save(&projects).await?;
        Ok(AddOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;
    use std::str::FromStr;

    fn project(name: &str, code: &str) -> Project {
        Project::new(name, code, Amount::from_str("1000").unwrap())
    }

    #[tokio::test]
    async fn test_add_then_list_preserves_call_order() {
        let env = TestEnv::new().await;
        let registry = ProjectRegistry::new(&env.config());

        for (name, code) in [("Alpha Works", "ALW"), ("Beta Line", "BTL"), ("Gamma", "GMA")] {
            let outcome = registry.add(project(name, code)).await.unwrap();
            assert_eq!(outcome, AddOutcome::Saved);
        }

        let listed = registry.list().await.unwrap();
        let codes: Vec<&str> = listed.iter().map(|p| p.short_code()).collect();
        assert_eq!(codes, vec!["ALW", "BTL", "GMA"]);
    }

    #[tokio::test]
    async fn test_empty_name_is_a_silent_no_op() {
        let env = TestEnv::new().await;
        let registry = ProjectRegistry::new(&env.config());
        registry.add(project("Alpha Works", "ALW")).await.unwrap();

        let outcome = registry.add(project("", "XXX")).await.unwrap();
        assert_eq!(outcome, AddOutcome::Skipped);

        let listed = registry.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].short_code(), "ALW");
    }

    #[tokio::test]
    async fn test_empty_code_is_a_silent_no_op() {
        let env = TestEnv::new().await;
        let registry = ProjectRegistry::new(&env.config());

        let outcome = registry.add(project("Alpha Works", "")).await.unwrap();
        assert_eq!(outcome, AddOutcome::Skipped);
        assert!(registry.list().await.unwrap().is_empty());
        // Storage was never touched, so the file does not exist yet.
        assert!(!env.config().projects_path().is_file());
    }

    #[tokio::test]
    async fn test_duplicate_short_codes_are_both_kept() {
        let env = TestEnv::new().await;
        let registry = ProjectRegistry::new(&env.config());
        registry.add(project("Depot Lighting", "DLT")).await.unwrap();
        registry
            .add(project("Depot Lighting Phase 2", "DLT"))
            .await
            .unwrap();

        let listed = registry.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|p| p.short_code() == "DLT"));
    }

    #[tokio::test]
    async fn test_reload_after_restart_is_identical() {
        let env = TestEnv::new().await;
        let registry = ProjectRegistry::new(&env.config());
        registry.add(project("Alpha Works", "ALW")).await.unwrap();
        registry.add(project("Beta Line", "BTL")).await.unwrap();
        let before = registry.list().await.unwrap();

        // A fresh registry over the same config simulates a process restart.
        let restarted = ProjectRegistry::new(&env.config());
        let after = restarted.list().await.unwrap();
        assert_eq!(before, after);
    }
}
