use crate::domain::product::NewProduct;
use crate::domain::types::ProductId;
use crate::dto::api::ProductListResponse;
use crate::forms::products::ProductJson;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::products::create_product;
use super::{ServiceError, ServiceResult};

/// Core business logic for `GET /api/products`: every product, unfiltered.
pub fn api_list_products<R>(repo: &R) -> ServiceResult<ProductListResponse>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default()) {
        Ok(products) => Ok(ProductListResponse { products }),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `POST /api/products`.
///
/// Decodes the JSON body through the shared product field table, so a body
/// that fails to decode persists nothing.
pub fn api_create_product<R>(body: ProductJson, repo: &R) -> ServiceResult<ProductId>
where
    R: ProductWriter,
{
    let product = NewProduct::try_from(body)?;
    create_product(&product, repo)
}
