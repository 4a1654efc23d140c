//! JSON bodies returned by the `/api` endpoints.

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::ProductId;

/// `GET /api/products`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// `POST /api/products`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: ProductId,
}

/// Successful `DELETE /api/product/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

/// Any failed API call.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
