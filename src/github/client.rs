// file: src/github/client.rs
// description: reqwest-backed GitHub REST client
// reference: https://docs.github.com/en/rest

use super::models::{ArchiveRequest, CommitRecord, PageCursor, Reference, Repository, Tree};
use super::{GitHubApi, RepositoryPage, pagination};
use crate::config::GitHubConfig;
use crate::error::{JanitorError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            JanitorError::Credentials("access token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| JanitorError::Http {
                operation: "build client".to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        let response = request.send().await.map_err(|e| JanitorError::Http {
            operation: operation.to_string(),
            source: e,
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(JanitorError::api(operation, status, body));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T> {
        response.json().await.map_err(|e| JanitorError::Decode {
            operation: operation.to_string(),
            message: e.to_string(),
        })
    }

    /// Percent-encodes each `/`-separated segment so names containing `#`, `%` or `?`
    /// stay inside the path.
    fn escape_segments(value: &str) -> String {
        value
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn repo_path(owner: &str, repo: &str) -> String {
        format!(
            "repos/{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        )
    }

    fn list_repositories_request(&self, organization: &str, cursor: PageCursor) -> RequestBuilder {
        self.request(
            Method::GET,
            &format!("orgs/{}/repos", urlencoding::encode(organization)),
        )
        .query(&[
            ("type", "all".to_string()),
            ("per_page", cursor.per_page.to_string()),
            ("page", cursor.page.to_string()),
        ])
    }

    fn branch_ref_request(&self, owner: &str, repo: &str, branch: &str) -> RequestBuilder {
        self.request(
            Method::GET,
            &format!(
                "{}/git/ref/heads/{}",
                Self::repo_path(owner, repo),
                Self::escape_segments(branch)
            ),
        )
    }

    fn tree_request(&self, owner: &str, repo: &str, sha: &str) -> RequestBuilder {
        self.request(
            Method::GET,
            &format!(
                "{}/git/trees/{}",
                Self::repo_path(owner, repo),
                urlencoding::encode(sha)
            ),
        )
        .query(&[("recursive", "1")])
    }

    fn commits_request(&self, owner: &str, repo: &str, sha: &str) -> RequestBuilder {
        self.request(
            Method::GET,
            &format!("{}/commits", Self::repo_path(owner, repo)),
        )
        .query(&[("sha", sha)])
    }

    fn archive_request(&self, owner: &str, repo: &str) -> RequestBuilder {
        self.request(Method::PATCH, &Self::repo_path(owner, repo))
            .json(&ArchiveRequest { archived: true })
    }

    /// Pairs a decoded listing with the next page advertised in its `Link` header.
    fn repository_page(headers: &HeaderMap, repositories: Vec<Repository>) -> RepositoryPage {
        let next_page = headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(pagination::next_page);

        RepositoryPage {
            repositories,
            next_page,
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_org_repositories(
        &self,
        organization: &str,
        cursor: PageCursor,
    ) -> Result<RepositoryPage> {
        let operation = "list organization repositories";
        let request = self.list_repositories_request(organization, cursor);

        let response = self.send(request, operation).await?;
        let headers = response.headers().clone();
        let repositories: Vec<Repository> = Self::decode(response, operation).await?;
        let page = Self::repository_page(&headers, repositories);

        debug!(
            "Fetched page {} of {} ({} repositories, next: {:?})",
            cursor.page,
            organization,
            page.repositories.len(),
            page.next_page
        );

        Ok(page)
    }

    async fn get_branch_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        let operation = "get branch reference";
        let response = self
            .send(self.branch_ref_request(owner, repo, branch), operation)
            .await?;
        Self::decode(response, operation).await
    }

    async fn get_tree(&self, owner: &str, repo: &str, sha: &str) -> Result<Tree> {
        let operation = "get tree";
        let response = self
            .send(self.tree_request(owner, repo, sha), operation)
            .await?;
        let tree: Tree = Self::decode(response, operation).await?;

        if tree.truncated {
            warn!("GitHub file tree was truncated for {}/{}", owner, repo);
        }

        Ok(tree)
    }

    async fn list_commits(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<CommitRecord>> {
        let operation = "list commits";
        let response = self
            .send(self.commits_request(owner, repo, sha), operation)
            .await?;
        Self::decode(response, operation).await
    }

    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let operation = "archive repository";
        let response = self
            .send(self.archive_request(owner, repo), operation)
            .await?;
        Self::decode(response, operation).await
    }
}
