use thiserror::Error;

/// Failure of a single backend call.
///
/// Every variant is swallowed by the sales page (logged, prior data kept);
/// the type exists so the API layer can use `?` and callers can tell cases
/// apart in logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected {0} payload format")]
    UnexpectedShape(&'static str),
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}
