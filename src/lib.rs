//! # classifieds-api-suite
//!
//! Black-box functional test suite for the classifieds item API.
//!
//! ## Endpoints under test
//!
//! - `POST /api/1/item`: create an item
//! - `GET /api/1/item/{id}`: fetch an item (with its statistics) by id
//! - `GET /api/1/{sellerID}/item`: fetch all items of a seller
//!
//! ## Example
//!
//! ```rust,no_run
//! use classifieds_api_suite::{ItemsClient, SuiteConfig, SuiteRunner};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ItemsClient::new(SuiteConfig::default())?;
//! let report = SuiteRunner::new(client).run_all().await;
//! for outcome in report.failures() {
//!     eprintln!("{} failed", outcome.case);
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod scenarios;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use client::{ApiResponse, ItemsClient};
pub use config::{SuiteConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult, ErrorCategory};
pub use runner::{CaseOutcome, SuiteReport, SuiteRunner};
pub use scenarios::{Case, Endpoint};
pub use types::{CreateItemResponse, ErrorResponse, ErrorResult, Item, NewItem, Statistics};
