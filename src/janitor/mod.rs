// file: src/janitor/mod.rs
// description: repository classification and bulk action pipeline
// reference: Internal module structure

pub mod actions;
pub mod calendar;
pub mod classifier;
pub mod traversal;

pub use actions::{ArchiveAction, PrintAction};
pub use calendar::Clock;
pub use classifier::EmptinessClassifier;
pub use traversal::{RepositoryTraversal, TraversalSummary};

use crate::error::Result;
use crate::github::Repository;
use async_trait::async_trait;

/// Decides whether a repository should be acted upon. Must not mutate remote state.
#[async_trait]
pub trait RepositoryPredicate: Send + Sync {
    async fn test(&self, repository: &Repository) -> Result<bool>;
}

/// Side effect applied to every repository the predicate accepts.
#[async_trait]
pub trait RepositoryAction: Send {
    async fn apply(&mut self, repository: &Repository) -> Result<()>;
}
