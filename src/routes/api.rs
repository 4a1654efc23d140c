use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::dto::api::{CreatedResponse, ErrorResponse, StatusResponse};
use crate::forms::products::ProductJson;
use crate::repository::DieselRepository;
use crate::routes::run_service;
use crate::services::ServiceError;
use crate::services::api::{
    api_create_product as api_create_product_service,
    api_list_products as api_list_products_service,
};
use crate::services::products::delete_product as delete_product_service;

#[get("/products")]
pub async fn api_list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_service(move || api_list_products_service(repo.get_ref())).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(err),
    }
}

#[post("/products")]
pub async fn api_create_product(
    repo: web::Data<DieselRepository>,
    web::Json(body): web::Json<ProductJson>,
) -> impl Responder {
    match run_service(move || api_create_product_service(body, repo.get_ref())).await {
        Ok(id) => {
            log::info!("Created product {id} via API");
            HttpResponse::Ok().json(CreatedResponse { id })
        }
        Err(err) => error_response(err),
    }
}

#[delete("/product/{product_id:[0-9a-fA-F]+}")]
pub async fn api_delete_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    match run_service(move || delete_product_service(&product_id, repo.get_ref())).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::deleted()),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("Product not found"))
        }
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal error"))
        }
    }
}
