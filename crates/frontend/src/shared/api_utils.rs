//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL and helpers for building request URLs.

/// Backend used when no build-time override is given
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

/// Backend location, provided to the component tree via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// `SALES_API_BASE` at build time, otherwise [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("SALES_API_BASE"))
    }

    fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// use sales_frontend::shared::api_utils::ApiConfig;
    /// let url = ApiConfig::default().url("/sales");
    /// assert_eq!(url, "http://localhost:4000/sales");
    /// ```
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
