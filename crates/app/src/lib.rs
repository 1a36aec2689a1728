//! Persistence, service and configuration layers for delivery fee quotes.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod observability;

#[cfg(test)]
mod test;
