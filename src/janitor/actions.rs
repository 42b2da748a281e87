// file: src/janitor/actions.rs
// description: terminal actions applied to matching repositories
// reference: print and archive handlers

use super::RepositoryAction;
use crate::error::Result;
use crate::github::{GitHubApi, Repository};
use async_trait::async_trait;
use std::io::Write;
use tracing::info;

/// Writes the name of every matching repository, one per line.
pub struct PrintAction<W> {
    out: W,
}

impl<W: Write + Send> PrintAction<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> RepositoryAction for PrintAction<W> {
    async fn apply(&mut self, repository: &Repository) -> Result<()> {
        writeln!(self.out, "{}", repository.name)?;
        Ok(())
    }
}

/// Archives matching repositories; already archived ones are left untouched.
pub struct ArchiveAction<'a, A, W> {
    api: &'a A,
    out: W,
    archived: usize,
}

impl<'a, A: GitHubApi, W: Write + Send> ArchiveAction<'a, A, W> {
    pub fn new(api: &'a A, out: W) -> Self {
        Self {
            api,
            out,
            archived: 0,
        }
    }

    /// Number of repositories this action archived.
    pub fn archived_count(&self) -> usize {
        self.archived
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<'a, A: GitHubApi, W: Write + Send> RepositoryAction for ArchiveAction<'a, A, W> {
    async fn apply(&mut self, repository: &Repository) -> Result<()> {
        if repository.archived {
            writeln!(self.out, "Repository {} is already archived.", repository.name)?;
            return Ok(());
        }

        self.api
            .archive_repository(&repository.owner.login, &repository.name)
            .await?;
        self.archived += 1;

        info!("Archived {}", repository.full_name());
        writeln!(self.out, "Repository {} has been archived.", repository.name)?;
        Ok(())
    }
}
