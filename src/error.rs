// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JanitorError>;

#[derive(Error, Debug)]
pub enum JanitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("HTTP request failed during {operation}: {source}")]
    Http {
        operation: String,
        source: reqwest::Error,
    },

    #[error("GitHub API returned {status} during {operation}: {body}")]
    Api {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response for {operation}: {message}")]
    Decode { operation: String, message: String },

    #[error("error fetching repositories (page {page}): {source}")]
    ListRepositories {
        page: u32,
        source: Box<JanitorError>,
    },

    #[error("error evaluating predicate for repo {repository}: {source}")]
    Predicate {
        repository: String,
        source: Box<JanitorError>,
    },

    #[error("error performing action for repo {repository}: {source}")]
    Action {
        repository: String,
        source: Box<JanitorError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JanitorError {
    pub fn api(operation: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    /// Name of the repository the error was raised for, if the traversal attached one.
    pub fn repository(&self) -> Option<&str> {
        match self {
            Self::Predicate { repository, .. } | Self::Action { repository, .. } => {
                Some(repository)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_name_the_repository() {
        let err = JanitorError::Predicate {
            repository: "widgets".to_string(),
            source: Box::new(JanitorError::api("get ref", 404, "Not Found")),
        };

        assert_eq!(err.repository(), Some("widgets"));
        assert_eq!(
            err.to_string(),
            "error evaluating predicate for repo widgets: GitHub API returned 404 during get ref: Not Found"
        );
    }

    #[test]
    fn test_unwrapped_errors_have_no_repository() {
        let err = JanitorError::Config("organization is required".to_string());
        assert_eq!(err.repository(), None);
    }
}
