use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::product::NewProduct;
use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, run_service};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    show_products as show_products_service, toggle_product as toggle_product_service,
};

#[derive(Deserialize)]
struct ProductsQueryParams {
    category: Option<String>,
}

#[get("/products")]
pub async fn show_products(
    params: web::Query<ProductsQueryParams>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let category = params.into_inner().category;
    let result = run_service(move || show_products_service(category.as_deref(), repo.get_ref()))
        .await;

    match result {
        Ok(page) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("products", &page.products);
            context.insert("categories", &page.categories);
            context.insert("current_category", &page.current_category);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render products page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/new")]
pub async fn new_product_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "new_product");
    render_template(&tera, "products/new.html", &context)
}

#[post("/products/new")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let product: NewProduct = match form.try_into() {
        Ok(product) => product,
        Err(e) => return invalid_form(&tera, &e.to_string()),
    };

    match run_service(move || create_product_service(&product, repo.get_ref())).await {
        Ok(id) => {
            log::info!("Created product {id}");
            FlashMessage::success("Product created.").send();
            redirect("/products")
        }
        Err(err) => {
            log::error!("Failed to add product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/products/delete/{product_id:[0-9a-fA-F]+}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    match run_service(move || delete_product_service(&product_id, repo.get_ref())).await {
        Ok(()) => FlashMessage::success("Product deleted.").send(),
        Err(ServiceError::NotFound) => {}
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/products")
}

#[post("/products/toggle/{product_id:[0-9a-fA-F]+}")]
pub async fn toggle_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    match run_service(move || toggle_product_service(&product_id, repo.get_ref())).await {
        Ok(()) | Err(ServiceError::NotFound) => {}
        Err(err) => {
            log::error!("Failed to toggle product: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/products")
}

/// Re-renders the creation form with the decoding error and a 400 status.
fn invalid_form(tera: &Tera, message: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("alerts", &[(message, "danger")]);
    context.insert("current_page", "new_product");

    let mut response = render_template(tera, "products/new.html", &context);
    *response.status_mut() = StatusCode::BAD_REQUEST;
    response
}
