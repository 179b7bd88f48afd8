/// Order model and database operations
///
/// This module provides the Order model plus the order↔product association
/// logic. Each order is owned by exactly one user via the scalar `user_id`
/// foreign key; products are linked many-to-many through the
/// `order_product` table.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE orders (
///     id SERIAL PRIMARY KEY,
///     order_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
///
/// CREATE TABLE order_product (
///     order_id INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE,
///     product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
///     UNIQUE (order_id, product_id)
/// );
/// ```
///
/// The UNIQUE pair constraint is the authoritative guard against linking
/// the same product twice to one order; handler-level existence checks are
/// only a fast path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::models::product::Product;

/// Order model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID (database-generated)
    pub id: i32,

    /// When the order was placed
    ///
    /// Defaults to creation time when not supplied
    pub order_date: DateTime<Utc>,

    /// Owning user
    pub user_id: i32,
}

/// Input for creating a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Owning user
    pub user_id: i32,

    /// Order timestamp; None means "now"
    pub order_date: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates a new order in the database
    ///
    /// # Returns
    ///
    /// The newly created order with its generated ID and resolved timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `user_id` does not reference an existing user (foreign key violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateOrder) -> Result<Self, sqlx::Error> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, order_date)
            VALUES ($1, COALESCE($2, NOW()))
            RETURNING id, order_date, user_id
            "#,
        )
        .bind(data.user_id)
        .bind(data.order_date)
        .fetch_one(pool)
        .await?;

        Ok(order)
    }

    /// Finds an order by ID
    ///
    /// # Returns
    ///
    /// The order if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, order_date, user_id
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// Lists all orders owned by a user
    ///
    /// Returns an empty vector when the user has no orders (or does not
    /// exist); never an error for an unknown user.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, order_date, user_id
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(orders)
    }

    /// Lists the products linked to an order
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn products(pool: &PgPool, order_id: i32) -> Result<Vec<Product>, sqlx::Error> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.product_name, p.price
            FROM products p
            JOIN order_product op ON op.product_id = p.id
            WHERE op.order_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(order_id)
        .fetch_all(pool)
        .await?;

        Ok(products)
    }

    /// Checks whether a product is already linked to an order
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn contains_product(
        pool: &PgPool,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM order_product
                WHERE order_id = $1 AND product_id = $2
            )
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Links a product to an order
    ///
    /// Insertion is idempotent: the UNIQUE (order_id, product_id) constraint
    /// plus ON CONFLICT DO NOTHING means concurrent duplicate requests
    /// cannot create two links.
    ///
    /// # Returns
    ///
    /// True if the link was inserted, false if it already existed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either side of the link does not exist (foreign key violation)
    /// - Database connection fails
    pub async fn add_product(
        pool: &PgPool,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO order_product (order_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (order_id, product_id) DO NOTHING
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes an order by ID
    ///
    /// Rows in `order_product` referencing the order are removed by the
    /// store's ON DELETE CASCADE constraint.
    ///
    /// # Returns
    ///
    /// True if the order was deleted, false if the order didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_default_date() {
        let create_order = CreateOrder {
            user_id: 1,
            order_date: None,
        };

        assert_eq!(create_order.user_id, 1);
        assert!(create_order.order_date.is_none());
    }

    #[test]
    fn test_order_json_field_names() {
        let order = Order {
            id: 3,
            order_date: Utc::now(),
            user_id: 1,
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["user_id"], 1);
        assert!(json["order_date"].is_string());
        // Products are exposed via GET /orders/:id/products, not inline
        assert!(json.get("products").is_none());
    }
}
