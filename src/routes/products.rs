use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::category::Category;
use crate::domain::product::{DataValidationError, NewProduct};
use crate::repository::{DieselRepository, ProductListQuery};
use crate::routes::{internal_error, json_error, product_not_found, require_json_content_type};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_product as get_product_service, list_products as list_products_service,
    update_product as update_product_service,
};

#[derive(Debug, Deserialize)]
struct ProductsQueryParams {
    name: Option<String>,
    category: Option<String>,
    available: Option<String>,
}

/// Parse the raw body into a validated `NewProduct`, mapping every failure
/// to a 400 with a field-identifying message.
fn deserialize_body(body: &web::Bytes) -> Result<NewProduct, HttpResponse> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            DataValidationError::BadPayload.to_string(),
        )
    })?;
    NewProduct::deserialize(&payload)
        .map_err(|e| json_error(StatusCode::BAD_REQUEST, e.to_string()))
}

#[post("/products")]
pub async fn create_product(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = require_json_content_type(&req) {
        return response;
    }

    let new_product = match deserialize_body(&body) {
        Ok(new_product) => new_product,
        Err(response) => return response,
    };

    match create_product_service(&new_product, repo.get_ref()) {
        Ok(product) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/products/{}", product.id)))
            .json(product),
        Err(_) => internal_error(),
    }
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<ProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let mut query = ProductListQuery::default();

    // At most one filter applies, in name > category > available order.
    if let Some(name) = &params.name {
        query = query.name(name.clone());
    } else if let Some(category) = &params.category {
        // Unrecognized names degrade to Unknown, matching payload leniency.
        query = query.category(Category::from_name(category).unwrap_or(Category::Unknown));
    } else if let Some(available) = &params.available {
        query = match available.to_ascii_lowercase().as_str() {
            "true" => query.available(true),
            "false" => query.available(false),
            other => {
                return json_error(
                    StatusCode::BAD_REQUEST,
                    format!("Query parameter 'available' must be 'true' or 'false', got '{other}'"),
                );
            }
        };
    }

    match list_products_service(query, repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(_) => internal_error(),
    }
}

#[get("/products/{id}")]
pub async fn get_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();

    match get_product_service(id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => product_not_found(id),
        Err(_) => internal_error(),
    }
}

#[put("/products/{id}")]
pub async fn update_product(
    req: HttpRequest,
    id: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();

    if let Err(response) = require_json_content_type(&req) {
        return response;
    }

    // An unknown id reports 404 before any payload validation runs.
    match get_product_service(id, repo.get_ref()) {
        Ok(_) => {}
        Err(ServiceError::NotFound) => return product_not_found(id),
        Err(_) => return internal_error(),
    }

    let new_product = match deserialize_body(&body) {
        Ok(new_product) => new_product,
        Err(response) => return response,
    };

    match update_product_service(id, &new_product, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => product_not_found(id),
        Err(_) => internal_error(),
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let id = id.into_inner();

    match delete_product_service(id, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(_) => internal_error(),
    }
}
