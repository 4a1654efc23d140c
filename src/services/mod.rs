pub use errors::{ServiceError, ServiceResult};

pub mod api;
pub mod errors;
pub mod products;
