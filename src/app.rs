//! Route registration and per-app middleware shared by the binary and tests.

use actix_web::cookie::Key;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;

use crate::dto::api::ErrorResponse;
use crate::routes::api::{api_create_product, api_delete_product, api_list_products};
use crate::routes::main::index;
use crate::routes::products::{
    add_product, delete_product, new_product_form, show_products, toggle_product,
};

/// Registers every route of the catalogue.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(api_list_products)
            .service(api_create_product)
            .service(api_delete_product),
    )
    .service(index)
    .service(show_products)
    .service(new_product_form)
    .service(add_product)
    .service(delete_product)
    .service(toggle_product);
}

/// JSON extractor settings for the API: any content type is accepted and
/// malformed bodies are answered with `{"error": ...}` and HTTP 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// Flash messages stored in a signed cookie.
pub fn message_framework(key: Key) -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(key).build();
    FlashMessagesFramework::builder(store).build()
}
