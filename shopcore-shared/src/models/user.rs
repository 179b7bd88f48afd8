/// User model and database operations
///
/// This module provides the User model and CRUD operations for managing
/// customer accounts. Users own orders via the `orders.user_id` foreign key.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id SERIAL PRIMARY KEY,
///     name VARCHAR(30) NOT NULL,
///     email VARCHAR(100) NOT NULL UNIQUE,
///     address VARCHAR(100) NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use shopcore_shared::models::user::{User, CreateUser};
/// use shopcore_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Jane Doe".to_string(),
///         email: "jane@example.com".to_string(),
///         address: "123 Main St".to_string(),
///     },
/// )
/// .await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing a customer account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (database-generated)
    pub id: i32,

    /// Display name
    pub name: String,

    /// Email address
    ///
    /// Must be unique across all users (enforced by the store)
    pub email: String,

    /// Mailing address
    pub address: String,
}

/// Input for creating a new user
///
/// The ID is always generated by the database; callers cannot supply one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Email address (must be unique)
    pub email: String,

    /// Mailing address
    pub address: String,
}

/// Input for updating an existing user
///
/// Updates are full-field overwrites: every field is replaced, the ID never
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: String,

    /// New email address
    pub email: String,

    /// New mailing address
    pub address: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Returns
    ///
    /// The newly created user with its generated ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, address
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.address)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, address
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users
    ///
    /// Returns every user, ordered by ID. The API surface is unfiltered and
    /// unpaginated.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, address
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Updates an existing user
    ///
    /// Overwrites name, email and address. The ID is never changed.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists for another user
    /// - Database connection fails
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, address = $4
            WHERE id = $1
            RETURNING id, name, email, address
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.address)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// Association rows (orders and their product links) are removed by the
    /// store's ON DELETE CASCADE constraints.
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if the user didn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
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
    fn test_create_user_struct() {
        let create_user = CreateUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            address: "1 Test Lane".to_string(),
        };

        assert_eq!(create_user.email, "test@example.com");
        assert_eq!(create_user.name, "Test User");
    }

    #[test]
    fn test_user_serializes_flat() {
        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            address: "1 Test Lane".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "test@example.com");
        // No nested relationship fields in entity JSON
        assert!(json.get("orders").is_none());
    }

    // Integration tests for database operations are in the API crate's
    // tests/ directory
}
