//! Product endpoints: creation and filtered, paginated listing.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use storefront_core::{Money, NewProduct, PageInfo, ProductFilter, ProductId, SizeVariant};

/// Request to create a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Product name.
    pub name: String,

    /// Product price as a decimal amount.
    pub price: Money,

    /// Available sizes and their quantities; may be empty.
    pub sizes: Vec<SizeVariant>,
}

/// Response after creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductResponse {
    /// Identifier of the created product.
    pub id: ProductId,
}

/// Query parameters for product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsQuery {
    /// Case-insensitive substring filter on the product name.
    pub name: Option<String>,

    /// Exact-match filter on any size label.
    pub size: Option<String>,

    /// Page size, 1 to 100 (default 10).
    pub limit: Option<u32>,

    /// Records to skip (default 0).
    pub offset: Option<u32>,
}

/// One product in a listing page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListItem {
    /// Product identifier.
    pub id: ProductId,

    /// Product name.
    pub name: String,

    /// Current price.
    pub price: Money,
}

/// A page of products with pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    /// Products in this page, ordered by identifier ascending.
    pub data: Vec<ProductListItem>,

    /// Pagination metadata.
    pub page: PageInfo,
}

/// Create a new product.
///
/// # Endpoint
///
/// ```text
/// POST /products
/// Content-Type: application/json
///
/// {
///   "name": "Hoodie",
///   "price": 45.5,
///   "sizes": [{"size": "M", "quantity": 50}]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": "..."}`; `400` on constraint violation
/// (empty name, non-positive price).
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), AppError> {
    let draft = NewProduct {
        name: request.name,
        price: request.price,
        sizes: request.sizes,
    };
    draft.validate()?;

    let product = state.products.insert(draft).await?;
    tracing::info!(product_id = %product.id, name = %product.name, "product created");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse { id: product.id }),
    ))
}

/// List products with optional name/size filters and pagination.
///
/// # Endpoint
///
/// ```text
/// GET /products?name=hoodie&size=M&limit=10&offset=0
/// ```
///
/// # Response
///
/// ```json
/// {
///   "data": [{"id": "...", "name": "Hoodie", "price": 45.5}],
///   "page": {"next": null, "limit": 1, "previous": null}
/// }
/// ```
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>, AppError> {
    let page = super::page_request(query.limit, query.offset)?;
    let filter = ProductFilter {
        name: query.name,
        size: query.size,
    };

    let products = state.products.list(filter, page).await?;
    let page_info = PageInfo::for_page(page, products.len());

    let data = products
        .into_iter()
        .map(|product| ProductListItem {
            id: product.id,
            name: product.name,
            price: product.price,
        })
        .collect();

    Ok(Json(ProductListResponse {
        data,
        page: page_info,
    }))
}
