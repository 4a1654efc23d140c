use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::types::{CategoryName, ProductId};

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

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
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Exact-match category filter. `None` lists every product.
    pub category: Option<CategoryName>,
}

impl ProductListQuery {
    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query, in creation order.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Distinct category labels currently in use, sorted.
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryName>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
///
/// Methods returning `usize` report the number of affected rows; zero means
/// the identifier did not exist.
pub trait ProductWriter {
    /// Persist a new product and return its assigned identifier.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId>;
    /// Apply a partial update.
    fn update_product(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<usize>;
    /// Flip the `available` flag in a single statement.
    fn toggle_product_availability(&self, id: ProductId) -> RepositoryResult<usize>;
    /// Delete a product by id.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
