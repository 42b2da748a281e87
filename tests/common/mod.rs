// In-memory GitHub organization shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use github_janitor::github::models::GitObject;
use github_janitor::{
    CommitRecord, GitHubApi, JanitorError, PageCursor, Reference, Repository, RepositoryPage,
    Result, Tree, TreeEntry,
};
use std::collections::HashSet;
use std::sync::Mutex;

pub const ORG: &str = "acme";

/// Wall clock used by every classification test.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRepositories(u32),
    GetRef(String),
    GetTree(String),
    ListCommits(String),
    Archive(String),
}

impl Call {
    pub fn repository(&self) -> Option<&str> {
        match self {
            Call::ListRepositories(_) => None,
            Call::GetRef(name)
            | Call::GetTree(name)
            | Call::ListCommits(name)
            | Call::Archive(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeRepo {
    pub repository: Repository,
    pub entries: Vec<TreeEntry>,
    pub commits: Vec<CommitRecord>,
    pub fail_ref: bool,
}

impl FakeRepo {
    pub fn new(name: &str) -> Self {
        Self {
            repository: Repository::new(ORG, name, "main"),
            entries: Vec::new(),
            commits: Vec::new(),
            fail_ref: false,
        }
    }

    pub fn files(mut self, paths: &[&str]) -> Self {
        self.entries
            .extend(paths.iter().map(|path| TreeEntry::blob(path)));
        self
    }

    pub fn dirs(mut self, paths: &[&str]) -> Self {
        self.entries
            .extend(paths.iter().map(|path| TreeEntry::tree(path)));
        self
    }

    pub fn last_commit(mut self, date: DateTime<Utc>) -> Self {
        let sha = format!("{}-c{}", self.repository.name, self.commits.len());
        self.commits.insert(0, CommitRecord::committed_at(&sha, date));
        self
    }

    pub fn archived(mut self) -> Self {
        self.repository = self.repository.archived();
        self
    }

    pub fn broken_ref(mut self) -> Self {
        self.fail_ref = true;
        self
    }
}

#[derive(Default)]
pub struct FakeGitHub {
    pages: Vec<Vec<FakeRepo>>,
    failing_page: Option<u32>,
    failing_archives: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, repos: Vec<FakeRepo>) -> Self {
        self.pages.push(repos);
        self
    }

    /// Spreads `names` over pages of `per_page` repositories, each holding only a README.
    pub fn with_repositories(names: &[String], per_page: usize) -> Self {
        names.chunks(per_page).fold(Self::new(), |fake, chunk| {
            fake.page(
                chunk
                    .iter()
                    .map(|name| FakeRepo::new(name).files(&["README.md"]))
                    .collect(),
            )
        })
    }

    pub fn fail_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn fail_archive(mut self, name: &str) -> Self {
        self.failing_archives.insert(name.to_string());
        self
    }

    /// Snapshot of a repository as the listing would return it, without recording a call.
    pub fn repository(&self, name: &str) -> Repository {
        self.find(name)
            .map(|repo| repo.repository.clone())
            .unwrap_or_else(|_| panic!("fake has no repository named {}", name))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, name: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.repository() == Some(name))
            .collect()
    }

    pub fn archived(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Archive(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn find(&self, name: &str) -> Result<&FakeRepo> {
        self.pages
            .iter()
            .flatten()
            .find(|repo| repo.repository.name == name)
            .ok_or_else(|| JanitorError::api("lookup", 404, "Not Found"))
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn list_org_repositories(
        &self,
        organization: &str,
        cursor: PageCursor,
    ) -> Result<RepositoryPage> {
        assert_eq!(organization, ORG);
        self.record(Call::ListRepositories(cursor.page));

        if self.failing_page == Some(cursor.page) {
            return Err(JanitorError::api("list organization repositories", 502, "Bad Gateway"));
        }

        let index = cursor.page as usize - 1;
        let repositories = self
            .pages
            .get(index)
            .map(|page| page.iter().map(|repo| repo.repository.clone()).collect())
            .unwrap_or_default();
        let next_page = (index + 1 < self.pages.len()).then_some(cursor.page + 1);

        Ok(RepositoryPage {
            repositories,
            next_page,
        })
    }

    async fn get_branch_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        assert_eq!(owner, ORG);
        self.record(Call::GetRef(repo.to_string()));

        let fake = self.find(repo)?;
        if fake.fail_ref {
            return Err(JanitorError::api("get branch reference", 409, "Git Repository is empty."));
        }

        Ok(Reference {
            name: format!("refs/heads/{}", branch),
            object: GitObject {
                sha: format!("{}-tip", repo),
                object_type: "commit".to_string(),
            },
        })
    }

    async fn get_tree(&self, _owner: &str, repo: &str, sha: &str) -> Result<Tree> {
        self.record(Call::GetTree(repo.to_string()));
        assert_eq!(sha, format!("{}-tip", repo));

        Ok(Tree {
            sha: sha.to_string(),
            entries: self.find(repo)?.entries.clone(),
            truncated: false,
        })
    }

    async fn list_commits(&self, _owner: &str, repo: &str, sha: &str) -> Result<Vec<CommitRecord>> {
        self.record(Call::ListCommits(repo.to_string()));
        assert_eq!(sha, format!("{}-tip", repo));

        Ok(self.find(repo)?.commits.clone())
    }

    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        assert_eq!(owner, ORG);
        self.record(Call::Archive(repo.to_string()));

        if self.failing_archives.contains(repo) {
            return Err(JanitorError::api("archive repository", 403, "Forbidden"));
        }

        Ok(self.find(repo)?.repository.clone().archived())
    }
}
