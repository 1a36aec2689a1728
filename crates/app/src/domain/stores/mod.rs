//! Stores

pub mod records;
mod repository;
pub mod source;

pub use source::PgStorePolicies;
