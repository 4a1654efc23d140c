//! Error conversion glue between the form layer and services.
//!
//! Forms must not depend on service error types, so conversions live here
//! and are only compiled with the `server` feature.

use crate::forms::products::ProductFormError;
use crate::services::ServiceError;

impl From<ProductFormError> for ServiceError {
    fn from(val: ProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
