//! Fee Routes

mod repository;
pub mod source;

pub use source::PgFeeRoutes;
