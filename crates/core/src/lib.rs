//! Carriage
//!
//! Carriage prices delivery for multi-store marketplace carts: it groups a cart by store,
//! waives fees for stores whose free-delivery threshold is met, and resolves every other
//! store's fee through an exact route, a wildcard route and finally a configured default.

pub mod breakdown;
pub mod calculator;
pub mod cart;
pub mod config;
pub mod fixtures;
mod money;
pub mod prelude;
pub mod resolution;
pub mod routes;
pub mod sources;
pub mod stores;
