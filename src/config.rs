// file: src/config.rs
// description: application configuration management with yaml/toml and env support
// reference: https://docs.rs/config

use crate::error::{JanitorError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = ".github-janitor.yaml";
pub const ENV_PREFIX: &str = "GITHUB_JANITOR";
const UNPREFIXED_ENV_KEYS: [&str; 2] = ["TOKEN", "ORGANIZATION"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub token: Option<String>,
    pub organization: Option<String>,
    pub github: GitHubConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_url: String,
    pub per_page: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            per_page: 500,
            timeout_secs: 30,
            user_agent: format!("github-janitor/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Rules deciding which repositories count as empty.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// File paths (compared case-insensitively) that do not count as content.
    pub allowed_files: Vec<String>,
    /// Repositories whose name ends with this suffix host the organization's pages site.
    pub pages_suffix: String,
    /// Name of the repository holding the organization profile.
    pub profile_repository: String,
    /// A repository touched within this many calendar months is never empty.
    pub stale_after_months: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            allowed_files: vec![
                "readme.md".to_string(),
                "license".to_string(),
                ".gitignore".to_string(),
            ],
            pages_suffix: ".github.io".to_string(),
            profile_repository: ".github".to_string(),
            stale_after_months: 1,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from `~/.github-janitor.yaml` when no path is
    /// given, then layers environment variables on top.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_from(path, std::env::vars())
    }

    /// Like [`Config::load`] with an explicit set of environment variables.
    ///
    /// Unprefixed `TOKEN` and `ORGANIZATION` are honoured; `GITHUB_JANITOR_*` variables
    /// override them.
    pub fn load_from<I>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        let unprefixed: config::Map<String, String> = UNPREFIXED_ENV_KEYS
            .iter()
            .filter_map(|key| vars.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        } else if let Some(default_path) = Self::default_path() {
            builder = builder.add_source(config::File::from(default_path).required(false));
        }

        builder = builder
            .add_source(config::Environment::default().source(Some(unprefixed)))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            );

        let settings = builder
            .build()
            .map_err(|e| JanitorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| JanitorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    /// Applies command-line values, which take precedence over file and environment values.
    pub fn with_overrides(mut self, token: Option<String>, organization: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        if let Some(organization) = organization.filter(|o| !o.trim().is_empty()) {
            self.organization = Some(organization);
        }
        self
    }

    pub fn organization(&self) -> Result<String> {
        match self.organization.as_deref().map(str::trim) {
            Some(org) if !org.is_empty() => Ok(org.to_string()),
            _ => Err(JanitorError::Config(
                "GitHub organization name is required. Use --organization flag or set it in the config file"
                    .to_string(),
            )),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.github.per_page == 0 {
            return Err(JanitorError::Config(
                "github.per_page must be greater than 0".to_string(),
            ));
        }

        if !self.github.api_url.starts_with("http://")
            && !self.github.api_url.starts_with("https://")
        {
            return Err(JanitorError::Config(format!(
                "Invalid github.api_url: {}",
                self.github.api_url
            )));
        }

        if self.classifier.allowed_files.is_empty() {
            return Err(JanitorError::Config(
                "classifier.allowed_files must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
