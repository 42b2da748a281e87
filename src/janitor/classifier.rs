// file: src/janitor/classifier.rs
// description: detects repositories holding only boilerplate files with no recent commits
// reference: tree and commit inspection over the GitHub API

use super::RepositoryPredicate;
use super::calendar::Clock;
use crate::config::ClassifierConfig;
use crate::error::{JanitorError, Result};
use crate::github::{GitHubApi, Repository};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

pub struct EmptinessClassifier<'a, A> {
    api: &'a A,
    rules: &'a ClassifierConfig,
    allowed_files: HashSet<String>,
    clock: Clock,
}

impl<'a, A: GitHubApi> EmptinessClassifier<'a, A> {
    pub fn new(api: &'a A, rules: &'a ClassifierConfig) -> Self {
        let allowed_files = rules
            .allowed_files
            .iter()
            .map(|file| file.to_lowercase())
            .collect();

        Self {
            api,
            rules,
            allowed_files,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Pages sites and the organization profile are never archival candidates.
    pub fn is_exempt(&self, repository: &Repository) -> bool {
        repository.name.ends_with(&self.rules.pages_suffix)
            || repository.name == self.rules.profile_repository
    }

    pub fn is_allowed_file(&self, path: &str) -> bool {
        self.allowed_files.contains(&path.to_lowercase())
    }

    pub async fn is_empty(&self, repository: &Repository) -> Result<bool> {
        if self.is_exempt(repository) {
            debug!("{} is exempt", repository.name);
            return Ok(false);
        }

        let owner = repository.owner.login.as_str();
        let name = repository.name.as_str();

        let reference = self
            .api
            .get_branch_ref(owner, name, &repository.default_branch)
            .await?;
        let sha = reference.object.sha.as_str();

        let tree = self.api.get_tree(owner, name, sha).await?;
        let files: HashSet<&str> = tree
            .entries
            .iter()
            .filter(|entry| entry.is_blob())
            .map(|entry| entry.path.as_str())
            .collect();

        // No tracked files at all: empty regardless of commit age.
        if files.is_empty() {
            return Ok(true);
        }

        if let Some(path) = files.iter().find(|path| !self.is_allowed_file(path)) {
            debug!("{} has content ({})", name, path);
            return Ok(false);
        }

        let commits = self.api.list_commits(owner, name, sha).await?;
        let Some(last_commit) = commits.first() else {
            return Ok(true);
        };

        let cutoff = self
            .clock
            .cutoff(self.rules.stale_after_months)
            .ok_or_else(|| {
                JanitorError::Config(format!(
                    "cannot subtract {} months from the current time",
                    self.rules.stale_after_months
                ))
            })?;

        match last_commit.committer_date() {
            Some(date) if date > cutoff => {
                debug!("{} was committed to on {}, too recent", name, date);
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}

#[async_trait]
impl<'a, A: GitHubApi> RepositoryPredicate for EmptinessClassifier<'a, A> {
    async fn test(&self, repository: &Repository) -> Result<bool> {
        self.is_empty(repository).await
    }
}
