//! Delivery Fees

pub mod errors;
pub mod service;

pub use errors::DeliveryFeesServiceError;
pub use service::*;
