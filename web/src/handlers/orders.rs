//! Order endpoints: validated creation and enriched, paginated listing.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use storefront_core::checkout::{self, ItemRequest};
use storefront_core::listing;
use storefront_core::{Money, NewOrder, OrderId, PageInfo, ProductId};

/// Request to create an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// User placing the order; free-form text.
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Items to order.
    pub items: Vec<OrderItemRequest>,
}

/// One requested line item.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRequest {
    /// Identifier of the product to order, as an opaque string.
    #[serde(rename = "productId")]
    pub product_id: String,

    /// Quantity to order.
    pub qty: u32,
}

/// Response after creating an order.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    /// Identifier of the created order.
    pub id: OrderId,
}

/// Query parameters for order listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersQuery {
    /// Page size, 1 to 100 (default 10).
    pub limit: Option<u32>,

    /// Records to skip (default 0).
    pub offset: Option<u32>,
}

/// Product display data attached to a listed line item.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetails {
    /// The referenced product's identifier.
    pub id: ProductId,

    /// The product's current name.
    pub name: String,
}

/// One line item in a listed order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemView {
    /// Denormalized product display data, resolved at read time.
    #[serde(rename = "productDetails")]
    pub product_details: ProductDetails,

    /// Quantity ordered.
    pub qty: u32,
}

/// One order in a listing page.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListItem {
    /// Order identifier.
    pub id: OrderId,

    /// Enriched line items, in stored order.
    pub items: Vec<OrderItemView>,

    /// Stored order total.
    pub total: Money,
}

/// A page of a user's orders with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    /// Orders in this page, ordered by identifier ascending.
    pub data: Vec<OrderListItem>,

    /// Pagination metadata.
    pub page: PageInfo,
}

/// Create a new order.
///
/// Every line is validated and priced against the product store before
/// anything is written: a malformed id, zero quantity, or unknown product
/// rejects the whole request and leaves the order store untouched.
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// Content-Type: application/json
///
/// {
///   "userId": "u1",
///   "items": [{"productId": "...", "qty": 2}]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": "..."}`; `400` on invalid productId format,
/// zero qty, or unknown product.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    let items: Vec<ItemRequest> = request
        .items
        .into_iter()
        .map(|item| ItemRequest {
            product_id: item.product_id,
            qty: item.qty,
        })
        .collect();

    let priced = checkout::price_items(state.products.as_ref(), &items).await?;

    let order = state
        .orders
        .insert(NewOrder {
            user_id: request.user_id,
            items: priced.lines,
            total: priced.total,
        })
        .await?;

    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        total = %order.total,
        "order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse { id: order.id }),
    ))
}

/// List a user's orders with line items enriched by current product data.
///
/// # Endpoint
///
/// ```text
/// GET /orders/:user_id?limit=10&offset=0
/// ```
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     {
///       "id": "...",
///       "items": [{"productDetails": {"id": "...", "name": "Hoodie"}, "qty": 2}],
///       "total": 91.0
///     }
///   ],
///   "page": {"next": null, "limit": 1, "previous": null}
/// }
/// ```
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, AppError> {
    let page = super::page_request(query.limit, query.offset)?;

    let (orders, total_count) = state.orders.list_by_user(&user_id, page).await?;
    tracing::debug!(%user_id, total_count, returned = orders.len(), "listing orders");

    let enriched = listing::enrich_orders(state.products.as_ref(), orders).await?;
    let page_info = PageInfo::for_page(page, enriched.len());

    let data = enriched
        .into_iter()
        .map(|order| OrderListItem {
            id: order.id,
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemView {
                    product_details: ProductDetails {
                        id: item.product.id,
                        name: item.product.name,
                    },
                    qty: item.qty,
                })
                .collect(),
            total: order.total,
        })
        .collect();

    Ok(Json(OrderListResponse {
        data,
        page: page_info,
    }))
}
