/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD endpoints
/// - `products`: Product CRUD endpoints
/// - `orders`: Order endpoints, including the order↔product association

pub mod health;
pub mod orders;
pub mod products;
pub mod users;
