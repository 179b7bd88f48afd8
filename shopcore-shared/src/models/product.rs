/// Product model and database operations
///
/// This module provides the Product model and CRUD operations for the
/// catalog. Products are linked to orders through the `order_product`
/// association table; see the order model for that side of the relation.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE products (
///     id SERIAL PRIMARY KEY,
///     product_name VARCHAR(100) NOT NULL,
///     price DOUBLE PRECISION NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Product model representing a catalog item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID (database-generated)
    pub id: i32,

    /// Product name
    pub product_name: String,

    /// Unit price
    ///
    /// Plain floating point, no currency or precision guarantees
    pub price: f64,
}

/// Input for creating a new product
///
/// The ID is always generated by the database; callers cannot supply one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product name
    pub product_name: String,

    /// Unit price
    pub price: f64,
}

/// Input for updating an existing product
///
/// Updates are full-field overwrites: every field is replaced, the ID never
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New product name
    pub product_name: String,

    /// New unit price
    pub price: f64,
}

impl Product {
    /// Creates a new product in the database
    ///
    /// # Returns
    ///
    /// The newly created product with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn create(pool: &PgPool, data: CreateProduct) -> Result<Self, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (product_name, price)
            VALUES ($1, $2)
            RETURNING id, product_name, price
            "#,
        )
        .bind(data.product_name)
        .bind(data.price)
        .fetch_one(pool)
        .await?;

        Ok(product)
    }

    /// Finds a product by ID
    ///
    /// # Returns
    ///
    /// The product if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(product)
    }

    /// Lists all products
    ///
    /// Returns every product, ordered by ID. The API surface is unfiltered
    /// and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, product_name, price
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(products)
    }

    /// Updates an existing product
    ///
    /// Overwrites product_name and price. The ID is never changed.
    ///
    /// # Returns
    ///
    /// The updated product if found, None if the product doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateProduct,
    ) -> Result<Option<Self>, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET product_name = $2, price = $3
            WHERE id = $1
            RETURNING id, product_name, price
            "#,
        )
        .bind(id)
        .bind(data.product_name)
        .bind(data.price)
        .fetch_optional(pool)
        .await?;

        Ok(product)
    }

    /// Deletes a product by ID
    ///
    /// Rows in `order_product` referencing the product are removed by the
    /// store's ON DELETE CASCADE constraint.
    ///
    /// # Returns
    ///
    /// True if the product was deleted, false if the product didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
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
    fn test_create_product_struct() {
        let create_product = CreateProduct {
            product_name: "Widget".to_string(),
            price: 9.99,
        };

        assert_eq!(create_product.product_name, "Widget");
        assert_eq!(create_product.price, 9.99);
    }

    #[test]
    fn test_product_json_field_names() {
        let product = Product {
            id: 7,
            product_name: "Widget".to_string(),
            price: 9.99,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["product_name"], "Widget");
        assert_eq!(json["price"], 9.99);
    }
}
