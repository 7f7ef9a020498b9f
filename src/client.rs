//! HTTP client for the classifieds API.
//!
//! Every endpoint is available twice:
//! - `send_*` methods return the raw [`ApiResponse`] (status plus body) so a
//!   scenario can assert on exact status codes and exact error bodies
//! - typed methods decode success bodies and turn 400/404 into
//!   [`ApiError::Validation`] / [`ApiError::NotFound`]
//!
//! No retries, no explicit timeouts: one call is one request.

use crate::config::SuiteConfig;
use crate::error::{ApiError, ApiResult};
use crate::logging::{log_debug, log_error};
use crate::types::{CreateItemResponse, ErrorResponse, Item, NewItem};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Status and body of one API call, read in full.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode the body as `T`, whatever the status.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ApiError::response_parsing(format!(
                "Invalid body for HTTP {}: {e}; body: {}",
                self.status.as_u16(),
                self.body
            ))
        })
    }

    /// Decode the body as untyped JSON for exact comparisons.
    pub fn json_value(&self) -> ApiResult<Value> {
        self.json()
    }

    /// Decode a success body as `T`, or map the failure status to an [`ApiError`].
    pub fn into_result<T: DeserializeOwned>(self) -> ApiResult<T> {
        if self.status.is_success() {
            self.json()
        } else {
            Err(self.into_error())
        }
    }

    /// Map a non-success response onto the error taxonomy.
    pub fn into_error(self) -> ApiError {
        let decoded = serde_json::from_str::<ErrorResponse>(&self.body).ok();
        let message = decoded
            .as_ref()
            .map(|r| r.result.message.clone())
            .unwrap_or_else(|| self.body.clone());

        match self.status {
            StatusCode::BAD_REQUEST => ApiError::validation(message, decoded),
            StatusCode::NOT_FOUND => ApiError::not_found(message, decoded),
            status => ApiError::unexpected_status(status.as_u16(), self.body),
        }
    }
}

/// Client for the item endpoints.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    http: reqwest::Client,
    config: SuiteConfig,
}

impl ItemsClient {
    /// Create a client for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the config fails validation.
    pub fn new(config: SuiteConfig) -> ApiResult<Self> {
        config.validate()?;

        log_debug!(base_url = %config.base_url, "Items client initialized");

        Ok(Self {
            http: reqwest::Client::new(),
            config,
        })
    }

    /// Client for [`SuiteConfig::from_env`].
    pub fn from_env() -> ApiResult<Self> {
        Self::new(SuiteConfig::from_env())
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// `POST /api/1/item` with any serializable body, including malformed ones.
    pub async fn send_create_item<B>(&self, body: &B) -> ApiResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url("/api/1/item");
        let request = self.http.post(&url).json(body);
        self.execute(Method::POST, &url, request).await
    }

    /// `GET /api/1/item/{id}`; `id` is sent verbatim.
    pub async fn send_get_item(&self, id: &str) -> ApiResult<ApiResponse> {
        let url = self.config.url(&format!("/api/1/item/{id}"));
        let request = self.http.get(&url);
        self.execute(Method::GET, &url, request).await
    }

    /// `GET /api/1/{sellerID}/item`; `seller_id` is sent verbatim.
    pub async fn send_get_seller_items(&self, seller_id: &str) -> ApiResult<ApiResponse> {
        let url = self.config.url(&format!("/api/1/{seller_id}/item"));
        let request = self.http.get(&url);
        self.execute(Method::GET, &url, request).await
    }

    /// Create an item and return the confirmation.
    pub async fn create_item(&self, item: &NewItem) -> ApiResult<CreateItemResponse> {
        self.send_create_item(item).await?.into_result()
    }

    /// Fetch an item by id. The service answers with a list of one.
    pub async fn get_item(&self, id: &str) -> ApiResult<Vec<Item>> {
        self.send_get_item(id).await?.into_result()
    }

    /// Fetch all items of a seller, possibly none.
    pub async fn get_items_by_seller(&self, seller_id: i64) -> ApiResult<Vec<Item>> {
        self.send_get_seller_items(&seller_id.to_string())
            .await?
            .into_result()
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<ApiResponse> {
        log_debug!(method = %method, url = %url, "Sending API request");

        let response = request.send().await.map_err(|e| {
            log_error!(method = %method, url = %url, error = %e, "HTTP request failed");
            ApiError::request_failed(format!("{method} {url} failed: {e}"), Some(Box::new(e)))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ApiError::request_failed(
                format!("Failed to read response body of {method} {url}: {e}"),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            "API response received"
        );

        Ok(ApiResponse::new(status, body))
    }
}
