//! Carriage Domain Concerns

mod amounts;
pub mod deliveries;
pub mod routes;
pub mod stores;
