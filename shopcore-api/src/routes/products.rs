/// Product CRUD endpoints
///
/// # Endpoints
///
/// - `POST /products` - Create product
/// - `GET /products` - List products
/// - `GET /products/:id` - Get product by id
/// - `PUT /products/:id` - Update product (full-field overwrite)
/// - `DELETE /products/:id` - Delete product

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use shopcore_shared::models::product::{CreateProduct, Product, UpdateProduct};
use validator::Validate;

/// Create/update product request body
///
/// There is no `id` field: identity is always store-generated on create and
/// immutable on update.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    /// Product name
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    pub product_name: String,

    /// Unit price
    ///
    /// Only presence and type are checked; the price carries no currency or
    /// precision guarantees
    pub price: f64,
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message including the deleted id
    pub message: String,
}

/// Create product
///
/// # Endpoint
///
/// ```text
/// POST /products
/// Content-Type: application/json
///
/// {
///   "product_name": "Widget",
///   "price": 9.99
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let product = Product::create(
        &state.db,
        CreateProduct {
            product_name: req.product_name,
            price: req.price,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// List products
///
/// Returns all products, unfiltered and unpaginated.
///
/// # Endpoint
///
/// ```text
/// GET /products
/// ```
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = Product::list(&state.db).await?;
    Ok(Json(products))
}

/// Get product by id
///
/// # Endpoint
///
/// ```text
/// GET /products/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No product with the given id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Product>> {
    let product = Product::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Update product by id
///
/// Overwrites product_name and price; the id never changes.
///
/// # Endpoint
///
/// ```text
/// PUT /products/:id
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `404 Not Found`: No product with the given id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<Json<Product>> {
    req.validate().map_err(ApiError::from_validation)?;

    let product = Product::update(
        &state.db,
        id,
        UpdateProduct {
            product_name: req.product_name,
            price: req.price,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Delete product by id
///
/// Removes the product and, via the store's cascade constraint, any links
/// to orders.
///
/// # Endpoint
///
/// ```text
/// DELETE /products/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No product with the given id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = Product::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: format!("Successfully deleted product {}", id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_request_valid() {
        let req = ProductRequest {
            product_name: "Widget".to_string(),
            price: 9.99,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_product_request_rejects_empty_name() {
        let req = ProductRequest {
            product_name: String::new(),
            price: 9.99,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("product_name"));
    }

    #[test]
    fn test_product_request_price_is_type_checked_only() {
        // Negative and zero prices pass validation; only presence and type
        // are enforced
        let req = ProductRequest {
            product_name: "Widget".to_string(),
            price: -1.0,
        };

        assert!(req.validate().is_ok());
    }
}
