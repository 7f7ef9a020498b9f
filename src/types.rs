//! Request and response bodies of the classifieds API.
//!
//! The service is inconsistent about the seller field: create requests send
//! `sellerID`, item responses return `sellerId`. [`NewItem`] serializes the
//! former, [`Item`] accepts either.

use crate::error::{ApiError, ApiResult};
use crate::fixtures::CONFIRMATION_PHRASE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Engagement counters attached to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub likes: i64,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    pub contacts: i64,
}

/// Body of `POST /api/1/item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

/// An item as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(rename = "sellerId", alias = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: Statistics,
}

impl Item {
    /// The item id parsed as a UUID, if it is one.
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

/// Body of a successful create: `{"status": "Сохранили объявление - <id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemResponse {
    pub status: String,
}

impl CreateItemResponse {
    /// Whether the status text starts with the fixed confirmation phrase.
    pub fn is_confirmation(&self) -> bool {
        self.status.starts_with(CONFIRMATION_PHRASE)
    }

    /// Identifier of the created item: the text after the last ` - `.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfirmation`] when there is no separator or
    /// the trailing text is not a UUID.
    pub fn item_id(&self) -> ApiResult<Uuid> {
        self.status
            .rsplit_once(" - ")
            .and_then(|(_, id)| Uuid::parse_str(id.trim()).ok())
            .ok_or_else(|| ApiError::invalid_confirmation(self.status.clone()))
    }
}

/// `result` part of an error body.
///
/// `messages` is `{}` on 400 responses and `null` on 404 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub message: String,
    #[serde(default)]
    pub messages: Option<Map<String, Value>>,
}

/// Error body: `{"status": "400", "result": {"message": ..., "messages": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub result: ErrorResult,
}

impl ErrorResponse {
    /// The string-encoded status parsed as a number.
    pub fn status_code(&self) -> Option<u16> {
        self.status.parse().ok()
    }
}
