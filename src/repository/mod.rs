use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
///
/// At most one filter applies per query; the route layer enforces that.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Exact-match filter on the product name.
    pub name: Option<String>,
    /// Filter on the product category.
    pub category: Option<Category>,
    /// Filter on availability.
    pub available: Option<bool>,
}

impl ProductListQuery {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product; the store assigns the id.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite every field of an existing product, preserving its id.
    /// Returns `None` when no row with that id exists.
    fn update_product(&self, id: ProductId, product: &NewProduct)
    -> RepositoryResult<Option<Product>>;
    /// Delete a product by id, returning the number of affected rows.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
