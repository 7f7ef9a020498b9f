//! Fixture values for the suite.
//!
//! The identifiers were found by hand against the live service: one item
//! that exists, one seller that has listings and one that has none.

use crate::types::{NewItem, Statistics};
use serde_json::{json, Value};

/// Item known to exist on the live service.
pub const TEST_ITEM_ID: &str = "8d954969-0c55-4b50-af0b-00115a280ef7";

/// Seller with existing listings.
pub const TEST_SELLER_WITH_ITEMS: i64 = 999_999;

/// Seller with no listings.
pub const TEST_SELLER_EMPTY: i64 = 99_999_999_999;

/// Seller id used when creating items outside the fixed payload.
pub const TEST_SELLER_VALID: i64 = 111_111;

/// Well-formed UUID that no item carries.
pub const UNKNOWN_ITEM_ID: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";

/// Not a UUID.
pub const MALFORMED_ITEM_ID: &str = "abc";

/// Not a number.
pub const MALFORMED_SELLER_ID: &str = "abc";

/// Prefix of the status text returned by a successful create.
pub const CONFIRMATION_PHRASE: &str = "Сохранили объявление";

/// Seller id of the fixed create payload.
pub const CREATE_SELLER_ID: i64 = 123;

/// Name of the fixed create payload.
pub const CREATE_NAME: &str = "testItem";

/// Price of the fixed create payload.
pub const CREATE_PRICE: i64 = 9900;

/// Statistics of the fixed create payload.
pub fn test_statistics() -> Statistics {
    Statistics {
        likes: 21,
        view_count: 11,
        contacts: 43,
    }
}

/// The fixed valid create payload.
pub fn valid_item() -> NewItem {
    NewItem {
        seller_id: CREATE_SELLER_ID,
        name: CREATE_NAME.to_string(),
        price: CREATE_PRICE,
        statistics: test_statistics(),
    }
}

/// Valid payload with the price negated.
pub fn negative_price_item() -> NewItem {
    NewItem {
        price: -CREATE_PRICE,
        ..valid_item()
    }
}

/// Payload with `name` left out. Not expressible as a [`NewItem`].
pub fn item_without_name() -> Value {
    json!({
        "sellerID": CREATE_SELLER_ID,
        "price": CREATE_PRICE,
        "statistics": test_statistics(),
    })
}

/// Payload whose `sellerID` is a string.
pub fn item_with_string_seller_id() -> Value {
    json!({
        "sellerID": "invalid seller",
        "name": CREATE_NAME,
        "price": CREATE_PRICE,
        "statistics": test_statistics(),
    })
}

/// Exact 400 body for a create without `name`.
pub fn missing_name_body() -> Value {
    json!({
        "result": {"message": "поле name обязательно", "messages": {}},
        "status": "400",
    })
}

/// Exact 404 body for an unknown item id.
pub fn not_found_body(id: &str) -> Value {
    json!({
        "result": {"message": format!("item {id} not found"), "messages": null},
        "status": "404",
    })
}

/// Exact 400 body for an item id that is not a UUID.
pub fn malformed_id_body(id: &str) -> Value {
    json!({
        "result": {"message": format!("ID айтема не UUID: {id}"), "messages": {}},
        "status": "400",
    })
}
