//! Test helper utilities for classifieds-api-suite integration tests
//!
//! Provides an in-process stand-in for the classifieds service built on
//! wiremock. It reproduces the behavior observed on the live service: the
//! same status codes, the same error bodies, the `sellerID`/`sellerId`
//! naming split, and negative prices stored as submitted.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use classifieds_api_suite::{ItemsClient, SuiteConfig};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const KNOWN_ITEM_ID: &str = "8d954969-0c55-4b50-af0b-00115a280ef7";
pub const SELLER_WITH_ITEMS: i64 = 999_999;

/// Items held by the fake service, in insertion order.
#[derive(Clone, Default)]
pub struct FakeStore {
    items: Arc<Mutex<Vec<Value>>>,
}

impl FakeStore {
    /// Store seeded with the items the suite's fixtures rely on.
    pub fn seeded() -> Self {
        let store = Self::default();
        store.insert(item_value(KNOWN_ITEM_ID, SELLER_WITH_ITEMS, "seeded", 100));
        store.insert(item_value(
            "0b6c7f2c-4a33-4e4e-9d59-3c2b1f0a9e11",
            SELLER_WITH_ITEMS,
            "seeded second",
            250,
        ));
        store.insert(item_value(
            "5f1d6d7e-2f0b-4b8e-8a61-7d8c9e0f1a2b",
            111_111,
            "other seller",
            10,
        ));
        store
    }

    pub fn insert(&self, item: Value) {
        self.items.lock().unwrap().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn find(&self, id: &str) -> Option<Value> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item["id"] == id)
            .cloned()
    }

    pub fn by_seller(&self, seller_id: i64) -> Vec<Value> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item["sellerId"] == seller_id)
            .cloned()
            .collect()
    }
}

fn item_value(id: &str, seller_id: i64, name: &str, price: i64) -> Value {
    json!({
        "id": id,
        "sellerId": seller_id,
        "name": name,
        "price": price,
        "statistics": {"likes": 1, "viewCount": 2, "contacts": 3},
        "createdAt": "2025-02-01 12:00:00.000000 +0300 +0300",
    })
}

fn bad_request(message: String) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "result": {"message": message, "messages": {}},
        "status": "400",
    }))
}

fn last_segment(request: &Request, index_from_end: usize) -> String {
    let segments: Vec<&str> = request.url.path().split('/').collect();
    segments[segments.len() - 1 - index_from_end].to_string()
}

/// `POST /api/1/item`
struct CreateItem(FakeStore);

impl Respond for CreateItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return bad_request("невалидные данные".to_string());
        };

        let Some(name) = body.get("name").and_then(Value::as_str).filter(|n| !n.is_empty())
        else {
            return bad_request("поле name обязательно".to_string());
        };
        let Some(seller_id) = body.get("sellerID").and_then(Value::as_i64) else {
            return bad_request("поле sellerID обязательно".to_string());
        };
        let Some(price) = body.get("price").and_then(Value::as_i64) else {
            return bad_request("поле price обязательно".to_string());
        };

        let id = Uuid::new_v4().to_string();
        let mut item = item_value(&id, seller_id, name, price);
        if let Some(statistics) = body.get("statistics") {
            item["statistics"] = statistics.clone();
        }
        self.0.insert(item);

        ResponseTemplate::new(200)
            .set_body_json(json!({ "status": format!("Сохранили объявление - {id}") }))
    }
}

/// `GET /api/1/item/{id}`
struct GetItem(FakeStore);

impl Respond for GetItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let raw_id = last_segment(request, 0);
        let Ok(id) = Uuid::parse_str(&raw_id) else {
            return bad_request(format!("ID айтема не UUID: {raw_id}"));
        };

        match self.0.find(&id.to_string()) {
            Some(item) => ResponseTemplate::new(200).set_body_json(json!([item])),
            None => ResponseTemplate::new(404).set_body_json(json!({
                "result": {"message": format!("item {raw_id} not found"), "messages": null},
                "status": "404",
            })),
        }
    }
}

/// `GET /api/1/{sellerID}/item`
struct GetSellerItems(FakeStore);

impl Respond for GetSellerItems {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let raw_seller = last_segment(request, 1);
        let Ok(seller_id) = raw_seller.parse::<i64>() else {
            return bad_request("передан некорректный идентификатор продавца".to_string());
        };

        ResponseTemplate::new(200).set_body_json(Value::Array(self.0.by_seller(seller_id)))
    }
}

/// Start a mock server that behaves like the classifieds service.
pub async fn start_fake_service() -> (MockServer, FakeStore) {
    let server = MockServer::start().await;
    let store = FakeStore::seeded();

    Mock::given(method("POST"))
        .and(path("/api/1/item"))
        .respond_with(CreateItem(store.clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/1/item/[^/]+$"))
        .respond_with(GetItem(store.clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/api/1/[^/]+/item$"))
        .respond_with(GetSellerItems(store.clone()))
        .mount(&server)
        .await;

    (server, store)
}

/// Client pointed at a mock server.
pub fn client_for(server: &MockServer) -> ItemsClient {
    ItemsClient::new(SuiteConfig::new(server.uri())).expect("mock server URI is a valid base URL")
}
