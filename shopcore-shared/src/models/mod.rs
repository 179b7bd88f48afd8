/// Database models for Shopcore
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: Customer accounts
/// - `product`: Catalog products
/// - `order`: Orders and the order↔product association
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
/// let new_user = CreateUser {
///     name: "Jane Doe".to_string(),
///     email: "jane@example.com".to_string(),
///     address: "123 Main St".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod order;
pub mod product;
pub mod user;
