// file: src/github/models.rs
// description: GitHub REST API payloads used by the janitor
// reference: https://docs.github.com/en/rest

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Owner {
    pub login: String,
}

/// Read-only snapshot of a repository as returned by the organization listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub archived: bool,
}

impl Repository {
    pub fn new(owner: &str, name: &str, default_branch: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: Owner {
                login: owner.to_string(),
            },
            default_branch: default_branch.to_string(),
            archived: false,
        }
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitObject {
    pub sha: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    pub name: String,
    pub object: GitObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Blob,
    Tree,
    Commit,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl TreeEntry {
    pub fn blob(path: &str) -> Self {
        Self {
            path: path.to_string(),
            entry_type: EntryType::Blob,
        }
    }

    pub fn tree(path: &str) -> Self {
        Self {
            path: path.to_string(),
            entry_type: EntryType::Tree,
        }
    }

    pub fn is_blob(&self) -> bool {
        self.entry_type == EntryType::Blob
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tree {
    pub sha: String,
    #[serde(rename = "tree")]
    pub entries: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Signature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommitDetails {
    #[serde(default)]
    pub message: String,
    pub committer: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetails,
}

impl CommitRecord {
    pub fn committed_at(sha: &str, date: DateTime<Utc>) -> Self {
        Self {
            sha: sha.to_string(),
            commit: CommitDetails {
                message: String::new(),
                committer: Some(Signature {
                    name: None,
                    email: None,
                    date,
                }),
            },
        }
    }

    pub fn committer_date(&self) -> Option<DateTime<Utc>> {
        self.commit.committer.as_ref().map(|c| c.date)
    }
}

/// Body of the update-repository call that archives a repository.
#[derive(Debug, Serialize)]
pub(crate) struct ArchiveRequest {
    pub archived: bool,
}

/// One page of an organization's repositories.
#[derive(Debug, Clone, Default)]
pub struct RepositoryPage {
    pub repositories: Vec<Repository>,
    /// Page number of the following page, `None` on the last page.
    pub next_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub per_page: u32,
}

impl PageCursor {
    pub fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    pub fn advance(self, page: u32) -> Self {
        Self { page, ..self }
    }
}
