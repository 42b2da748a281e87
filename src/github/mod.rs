// file: src/github/mod.rs
// description: GitHub API surface consumed by the janitor
// reference: https://docs.github.com/en/rest

pub mod client;
pub mod models;
pub mod pagination;

pub use client::GitHubClient;
pub use models::{
    CommitRecord, EntryType, Owner, PageCursor, Reference, Repository, RepositoryPage, Tree,
    TreeEntry,
};

use crate::error::Result;
use async_trait::async_trait;

/// Remote operations the traversal, classifier and actions depend on.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Lists one page of an organization's repositories of every type.
    async fn list_org_repositories(
        &self,
        organization: &str,
        cursor: PageCursor,
    ) -> Result<RepositoryPage>;

    /// Resolves `refs/heads/{branch}`.
    async fn get_branch_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference>;

    /// Fetches the full recursive tree at `sha`.
    async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> Result<Tree>;

    /// Lists commits reachable from `sha`, newest first.
    async fn list_commits(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<CommitRecord>>;

    /// Sets the archived flag on a repository.
    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<Repository>;
}
