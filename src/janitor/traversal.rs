// file: src/janitor/traversal.rs
// description: sequential page-by-page walk over an organization's repositories
// reference: paginated predicate/action driver

use super::{RepositoryAction, RepositoryPredicate};
use crate::error::{JanitorError, Result};
use crate::github::{GitHubApi, PageCursor};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalSummary {
    pub pages: usize,
    pub visited: usize,
    pub matched: usize,
}

pub struct RepositoryTraversal<'a, A> {
    api: &'a A,
    organization: &'a str,
    per_page: u32,
}

impl<'a, A: GitHubApi> RepositoryTraversal<'a, A> {
    pub fn new(api: &'a A, organization: &'a str, per_page: u32) -> Self {
        Self {
            api,
            organization,
            per_page,
        }
    }

    /// Visits every repository once, in service order, running `action` on each one
    /// `predicate` accepts. The first error from any step ends the walk.
    pub async fn for_each<P, X>(&self, predicate: &P, action: &mut X) -> Result<TraversalSummary>
    where
        P: RepositoryPredicate,
        X: RepositoryAction,
    {
        if self.organization.trim().is_empty() {
            return Err(JanitorError::Config(
                "organization name must not be empty".to_string(),
            ));
        }

        let mut cursor = PageCursor::first(self.per_page);
        let mut summary = TraversalSummary::default();

        loop {
            let page = self
                .api
                .list_org_repositories(self.organization, cursor)
                .await
                .map_err(|e| JanitorError::ListRepositories {
                    page: cursor.page,
                    source: Box::new(e),
                })?;
            summary.pages += 1;

            debug!(
                "Processing page {} ({} repositories)",
                cursor.page,
                page.repositories.len()
            );

            for repository in &page.repositories {
                summary.visited += 1;

                let matched =
                    predicate
                        .test(repository)
                        .await
                        .map_err(|e| JanitorError::Predicate {
                            repository: repository.name.clone(),
                            source: Box::new(e),
                        })?;

                if !matched {
                    debug!("Skipping {}", repository.name);
                    continue;
                }

                summary.matched += 1;
                action
                    .apply(repository)
                    .await
                    .map_err(|e| JanitorError::Action {
                        repository: repository.name.clone(),
                        source: Box::new(e),
                    })?;
            }

            match page.next_page {
                Some(next) => cursor = cursor.advance(next),
                None => break,
            }
        }

        info!(
            "Visited {} repositories across {} pages, {} matched",
            summary.visited, summary.pages, summary.matched
        );

        Ok(summary)
    }
}
