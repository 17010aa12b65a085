//! End-to-end HTTP tests against the full router with an in-memory store.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{json, Value};
use storefront_core::{Money, OrderStore, ProductId, ProductStore};
use storefront_memory::MemoryStore;
use storefront_web::AppState;

fn server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(
        Arc::clone(&store) as Arc<dyn ProductStore>,
        Arc::clone(&store) as Arc<dyn OrderStore>,
    );
    let server = TestServer::new(storefront_web::router(state)).unwrap();
    (server, store)
}

async fn create_product(server: &TestServer, name: &str, price: f64, sizes: Value) -> String {
    let response = server
        .post("/products")
        .json(&json!({"name": name, "price": price, "sizes": sizes}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

async fn create_order(server: &TestServer, user_id: &str, items: Value) -> String {
    let response = server
        .post("/orders")
        .json(&json!({"userId": user_id, "items": items}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn banner_and_health_respond() {
    let (server, _) = server();

    let root = server.get("/").await;
    root.assert_status_ok();
    assert!(root.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("running"));

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.text(), "ok");
}

#[tokio::test]
async fn product_creation_validates_constraints() {
    let (server, store) = server();

    for body in [
        json!({"name": "Hoodie", "price": 0.0, "sizes": []}),
        json!({"name": "Hoodie", "price": -1.0, "sizes": []}),
        json!({"name": "", "price": 10.0, "sizes": []}),
    ] {
        let response = server.post("/products").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
    assert_eq!(store.product_count(), 0);
}

#[tokio::test]
async fn product_creation_returns_fresh_ids() {
    let (server, _) = server();
    let a = create_product(&server, "Hoodie", 45.5, json!([])).await;
    let b = create_product(&server, "Hoodie", 45.5, json!([])).await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn size_filter_returns_only_matching_products() {
    let (server, _) = server();
    create_product(
        &server,
        "Test Hoodie",
        45.5,
        json!([
            {"size": "S", "quantity": 30},
            {"size": "M", "quantity": 50},
            {"size": "XL", "quantity": 20}
        ]),
    )
    .await;
    create_product(
        &server,
        "Shirt",
        19.99,
        json!([{"size": "XL", "quantity": 5}]),
    )
    .await;

    let response = server.get("/products").add_query_param("size", "M").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Test Hoodie");
    assert_eq!(data[0]["price"], json!(45.5));
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let (server, _) = server();
    create_product(&server, "Test Hoodie", 45.5, json!([])).await;
    create_product(&server, "Shirt", 19.99, json!([])).await;

    let response = server
        .get("/products")
        .add_query_param("name", "hoodie")
        .await;
    let body = response.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Test Hoodie");
}

#[tokio::test]
async fn pagination_windows_agree_and_report_metadata() {
    let (server, _) = server();
    create_product(&server, "A", 1.0, json!([])).await;
    create_product(&server, "B", 2.0, json!([])).await;

    let all = server
        .get("/products")
        .add_query_param("limit", 2)
        .add_query_param("offset", 0)
        .await
        .json::<Value>();
    let first = server
        .get("/products")
        .add_query_param("limit", 1)
        .add_query_param("offset", 0)
        .await
        .json::<Value>();
    let second = server
        .get("/products")
        .add_query_param("limit", 1)
        .add_query_param("offset", 1)
        .await
        .json::<Value>();

    // Two one-item windows reproduce the two-item page in the same order.
    assert_eq!(all["data"][0]["id"], first["data"][0]["id"]);
    assert_eq!(all["data"][1]["id"], second["data"][0]["id"]);

    // First window was full: next offset advertised, no previous.
    assert_eq!(first["page"], json!({"next": "1", "limit": 1, "previous": null}));
    // Second window: full as well, previous points back to the start.
    assert_eq!(second["page"], json!({"next": "2", "limit": 1, "previous": "0"}));
}

#[tokio::test]
async fn limit_out_of_range_is_rejected() {
    let (server, _) = server();
    for limit in [0, 101] {
        let response = server.get("/products").add_query_param("limit", limit).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn order_with_malformed_product_id_is_rejected() {
    let (server, store) = server();
    let response = server
        .post("/orders")
        .json(&json!({"userId": "u1", "items": [{"productId": "not-an-id", "qty": 1}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn order_with_unknown_product_leaves_store_unchanged() {
    let (server, store) = server();
    let missing = ProductId::generate();

    let response = server
        .post("/orders")
        .json(&json!({"userId": "u1", "items": [{"productId": missing.to_string(), "qty": 2}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.order_count(), 0);

    let listing = server.get("/orders/u1").await.json::<Value>();
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn order_with_zero_quantity_is_rejected() {
    let (server, store) = server();
    let product = create_product(&server, "Hoodie", 45.5, json!([])).await;

    let response = server
        .post("/orders")
        .json(&json!({"userId": "u1", "items": [{"productId": product, "qty": 0}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn order_with_overflowing_total_is_rejected() {
    let (server, store) = server();
    // A price this large is accepted at creation; doubling it would not fit
    // in i64 cents, so the order must be rejected rather than wrap.
    let product = create_product(&server, "Yacht", 90_000_000_000_000_000.0, json!([])).await;

    let response = server
        .post("/orders")
        .json(&json!({"userId": "u1", "items": [{"productId": product, "qty": 2}]}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn worked_example_hoodie_order() {
    let (server, _) = server();
    let product = create_product(
        &server,
        "Hoodie",
        45.5,
        json!([{"size": "M", "quantity": 50}]),
    )
    .await;

    let order = create_order(
        &server,
        "u1",
        json!([{"productId": &product, "qty": 2}]),
    )
    .await;
    assert!(!order.is_empty());

    let body = server.get("/orders/u1").await.json::<Value>();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], json!(order));
    assert_eq!(data[0]["total"], json!(91.0));
    assert_eq!(
        data[0]["items"],
        json!([{"productDetails": {"id": product, "name": "Hoodie"}, "qty": 2}])
    );
    assert_eq!(body["page"], json!({"next": null, "limit": 1, "previous": null}));
}

#[tokio::test]
async fn order_listing_is_scoped_to_the_user() {
    let (server, _) = server();
    let product = create_product(&server, "Hoodie", 45.5, json!([])).await;

    create_order(&server, "u1", json!([{"productId": &product, "qty": 1}])).await;
    create_order(&server, "u1", json!([{"productId": &product, "qty": 3}])).await;

    let u1 = server.get("/orders/u1").await.json::<Value>();
    let data = u1["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for order in data {
        assert_eq!(order["items"][0]["productDetails"]["name"], "Hoodie");
    }

    let u2 = server.get("/orders/u2").await.json::<Value>();
    assert_eq!(u2["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stored_totals_survive_price_changes_but_names_stay_current() {
    let (server, store) = server();
    let product = create_product(&server, "Hoodie", 45.5, json!([])).await;
    create_order(&server, "u1", json!([{"productId": &product, "qty": 2}])).await;

    // Out-of-band change to the product record: new price, new name.
    let id = ProductId::parse(&product).unwrap();
    let mut changed = ProductStore::get(store.as_ref(), id).await.unwrap().unwrap();
    changed.price = Money::from_cents(9999);
    changed.name = "Zip Hoodie".to_string();
    store.upsert_product(changed).unwrap();

    let body = server.get("/orders/u1").await.json::<Value>();
    let order = &body["data"][0];
    // Frozen at order time.
    assert_eq!(order["total"], json!(91.0));
    // Read-time join picks up the current name.
    assert_eq!(order["items"][0]["productDetails"]["name"], "Zip Hoodie");
}

#[tokio::test]
async fn missing_product_lines_get_a_placeholder() {
    let (server, store) = server();
    let product = create_product(&server, "Hoodie", 45.5, json!([])).await;
    create_order(&server, "u1", json!([{"productId": &product, "qty": 2}])).await;

    let id = ProductId::parse(&product).unwrap();
    assert!(store.remove_product(id).unwrap());

    let body = server.get("/orders/u1").await.json::<Value>();
    let order = &body["data"][0];
    // The line is kept, not dropped; total still adds up.
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["productDetails"]["name"], "unknown product");
    assert_eq!(order["items"][0]["productDetails"]["id"], json!(product));
    assert_eq!(order["total"], json!(91.0));
}
