use std::sync::Mutex;

use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::types::{CategoryName, ProductId};
use crate::repository::{ProductListQuery, ProductReader, ProductWriter, RepositoryResult};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: Mutex<Vec<Product>>,
    last_id: Mutex<i32>,
}

impl TestRepository {
    pub fn new(products: Vec<Product>) -> Self {
        let last_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Self {
            products: Mutex::new(products),
            last_id: Mutex::new(last_id),
        }
    }

    /// Snapshot of the stored products.
    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut items = self.products();
        if let Some(category) = query.category {
            items.retain(|p| p.category == category);
        }
        Ok(items)
    }

    fn list_categories(&self) -> RepositoryResult<Vec<CategoryName>> {
        let mut categories: Vec<CategoryName> =
            self.products().into_iter().map(|p| p.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.products().into_iter().find(|p| p.id == id))
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        let mut last_id = self.last_id.lock().unwrap();
        *last_id += 1;
        let id = ProductId::new(*last_id)?;
        self.products
            .lock()
            .unwrap()
            .push(product.clone().into_product(id));
        Ok(id)
    }

    fn update_product(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<usize> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) if !patch.is_empty() => {
                patch.apply_to(product);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    fn toggle_product_availability(&self, id: ProductId) -> RepositoryResult<usize> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.available = !product.available;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(before - products.len())
    }
}
