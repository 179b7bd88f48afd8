/// Order endpoints
///
/// # Endpoints
///
/// - `POST /orders` - Create order
/// - `POST /orders/:order_id/add_product/:product_id` - Link product to order
/// - `GET /orders/user/:user_id` - List a user's orders
/// - `GET /orders/:order_id/products` - List an order's linked products
/// - `DELETE /orders/:order_id/remove_product` - Delete the order
///
/// The `remove_product` path is preserved verbatim from the original API
/// for endpoint compatibility; it deletes the entire order, not a single
/// product link.

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
use shopcore_shared::models::{
    order::{CreateOrder, Order},
    product::Product,
};
use validator::Validate;

/// Create order request body
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    /// Owning user
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i32,

    /// Order timestamp (ISO 8601); defaults to now when omitted
    pub order_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Create order
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// Content-Type: application/json
///
/// {
///   "user_id": 1,
///   "order_date": "2025-01-03T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed, or `user_id` does not reference
///   an existing user (foreign key violation mapped to "Invalid user id")
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let order = Order::create(
        &state.db,
        CreateOrder {
            user_id: req.user_id,
            order_date: req.order_date,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Link a product to an order
///
/// Checks run in fixed precedence: order exists, product exists, link does
/// not already exist. The duplicate pre-check is a fast path; the UNIQUE
/// constraint on `order_product` is the authoritative guard, so a lost race
/// between concurrent identical requests still reports the duplicate.
///
/// # Endpoint
///
/// ```text
/// POST /orders/:order_id/add_product/:product_id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: "Order not found" or "Product not found"
/// - `400 Bad Request`: "Product already in the order"
pub async fn add_product_to_order(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i32, i32)>,
) -> ApiResult<Json<MessageResponse>> {
    let order = Order::find_by_id(&state.db, order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    let product = Product::find_by_id(&state.db, product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    if Order::contains_product(&state.db, order.id, product.id).await? {
        return Err(ApiError::BadRequest(
            "Product already in the order".to_string(),
        ));
    }

    let inserted = Order::add_product(&state.db, order.id, product.id).await?;
    if !inserted {
        // Concurrent identical request won the race
        return Err(ApiError::BadRequest(
            "Product already in the order".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: format!(
            "Product {} has been added to Order {}",
            product.id, order.id
        ),
    }))
}

/// List a user's orders
///
/// Returns an empty list (with success status) when the user has no orders
/// or does not exist; never an error.
///
/// # Endpoint
///
/// ```text
/// GET /orders/user/:user_id
/// ```
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = Order::list_by_user(&state.db, user_id).await?;
    Ok(Json(orders))
}

/// List an order's linked products
///
/// # Endpoint
///
/// ```text
/// GET /orders/:order_id/products
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No order with the given id
pub async fn list_order_products(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> ApiResult<Json<Vec<Product>>> {
    let order = Order::find_by_id(&state.db, order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    let products = Order::products(&state.db, order.id).await?;
    Ok(Json(products))
}

/// Delete an order
///
/// Despite the path naming (kept for endpoint compatibility), this deletes
/// the entire order and its product links.
///
/// # Endpoint
///
/// ```text
/// DELETE /orders/:order_id/remove_product
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No order with the given id
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Order::delete(&state.db, order_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Order not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: format!("Successfully deleted order {}", order_id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_request_valid() {
        let req = CreateOrderRequest {
            user_id: 1,
            order_date: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_order_request_rejects_zero_user_id() {
        let req = CreateOrderRequest {
            user_id: 0,
            order_date: None,
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
    }
}
