// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod credentials;
pub mod error;
pub mod github;
pub mod janitor;
pub mod prompt;
pub mod session;
pub mod utils;

pub use config::{ClassifierConfig, Config, GitHubConfig};
pub use error::{JanitorError, Result};
pub use github::{
    CommitRecord, GitHubApi, GitHubClient, PageCursor, Reference, Repository, RepositoryPage,
    Tree, TreeEntry,
};
pub use janitor::{
    ArchiveAction, Clock, EmptinessClassifier, PrintAction, RepositoryAction,
    RepositoryPredicate, RepositoryTraversal, TraversalSummary,
};
pub use session::Session;
