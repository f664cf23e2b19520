/// Error types for searching and loading images
///
/// Every error is scoped to the single user action that caused it.
/// They are `Clone` because they travel inside iced messages.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The query field holds no non-whitespace characters
    #[error("Please enter search terms")]
    EmptyQuery,

    /// The server answered with something other than 200 OK
    #[error("search request failed with HTTP status {status}")]
    Request { status: u16 },

    /// The request never produced a response (DNS, TLS, timeout...)
    #[error("search request failed: {0}")]
    Transport(String),

    /// The body was not JSON, or had no `items` array
    #[error("malformed search response: {0}")]
    MalformedResponse(String),

    /// A thumbnail or full-size image could not be downloaded or decoded
    #[error("image load failed: {0}")]
    Image(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SearchError::Request {
                status: status.as_u16(),
            },
            None => SearchError::Transport(err.to_string()),
        }
    }
}
