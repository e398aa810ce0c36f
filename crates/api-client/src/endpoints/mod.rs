//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one resource family.
//!
//! | Module | Backend route | Description |
//! |--------|---------------|-------------|
//! | `food` | `GET /food/{id}` | Single menu item |
//! | `restaurants` | `GET /restaurant/{id}` | Single restaurant |
//!
//! Bookmarks and carts share the same shape and are reached through
//! [`crate::FoodhubClient::resource`].

pub mod food;
pub mod restaurants;

pub use food::FoodApi;
pub use restaurants::RestaurantsApi;
