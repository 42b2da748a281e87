// file: src/session.rs
// description: startup-resolved client, organization and rules shared by every command
// reference: application bootstrap

use crate::config::Config;
use crate::credentials;
use crate::error::Result;
use crate::github::{GitHubApi, GitHubClient};
use crate::janitor::{
    ArchiveAction, Clock, EmptinessClassifier, PrintAction, RepositoryTraversal, TraversalSummary,
};
use std::io::Write;
use tracing::info;

pub struct Session<A = GitHubClient> {
    api: A,
    organization: String,
    config: Config,
    clock: Clock,
}

impl Session<GitHubClient> {
    /// Resolves the organization and access token and builds the GitHub client.
    /// Fails before any request is made when either is missing.
    pub async fn connect(config: Config) -> Result<Self> {
        let organization = config.organization()?;
        let token = credentials::resolve_token(config.token.as_deref()).await?;
        let api = GitHubClient::new(&config.github, &token)?;

        info!(
            "Connected to {} for organization {}",
            config.github.api_url, organization
        );

        Ok(Self::new(api, organization, config))
    }
}

impl<A: GitHubApi> Session<A> {
    pub fn new(api: A, organization: String, config: Config) -> Self {
        Self {
            api,
            organization,
            config,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn traversal(&self) -> RepositoryTraversal<'_, A> {
        RepositoryTraversal::new(&self.api, &self.organization, self.config.github.per_page)
    }

    fn classifier(&self) -> EmptinessClassifier<'_, A> {
        EmptinessClassifier::new(&self.api, &self.config.classifier).with_clock(self.clock)
    }

    /// Writes the name of every empty repository to `out`.
    pub async fn scan<W: Write + Send>(&self, out: W) -> Result<TraversalSummary> {
        info!("Scanning {} for empty repositories", self.organization);
        let mut action = PrintAction::new(out);
        self.traversal()
            .for_each(&self.classifier(), &mut action)
            .await
    }

    /// Archives every empty repository, reporting each one to `out`.
    pub async fn archive<W: Write + Send>(&self, out: W) -> Result<TraversalSummary> {
        info!("Archiving empty repositories in {}", self.organization);
        let mut action = ArchiveAction::new(&self.api, out);
        let summary = self
            .traversal()
            .for_each(&self.classifier(), &mut action)
            .await?;

        info!("Archived {} repositories", action.archived_count());
        Ok(summary)
    }
}
