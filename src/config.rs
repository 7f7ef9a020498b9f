use crate::error::{ApiError, ApiResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Base URL of the public service under test.
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// Environment variable that redirects the suite to another host.
pub const BASE_URL_ENV: &str = "CLASSIFIEDS_API_BASE_URL";

/// Where the suite sends its requests.
///
/// There are deliberately no timeout or retry knobs: every call uses the HTTP
/// client's defaults and a failure is reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub base_url: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SuiteConfig {
    /// Config pointing at `base_url`, with any trailing `/` removed.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`]
    /// when the variable is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log_debug!(base_url = %url.trim(), "Base URL taken from environment");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base URL is empty or does not
    /// use the `http`/`https` scheme.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::configuration("Base URL is required"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::configuration(format!(
                "Base URL must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Join an API path (starting with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
