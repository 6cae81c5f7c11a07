use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Persist a new product and return it with its store-assigned id.
pub fn create_product<R>(new_product: &NewProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    match repo.create_product(new_product) {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List products, optionally narrowed by a single filter.
pub fn list_products<R>(query: ProductListQuery, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products(query) {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single product by id.
///
/// Non-positive ids can never exist, so they map straight to `NotFound`.
pub fn get_product<R>(id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite an existing product's fields, preserving its id.
pub fn update_product<R>(id: i32, new_product: &NewProduct, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.update_product(id, new_product) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a product by id. Deleting an id that does not exist is not an
/// error.
pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Ok(()),
    };

    match repo.delete_product(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
