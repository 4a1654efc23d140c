use crate::domain::product::{ALL_CATEGORIES, NewProduct, Product};
use crate::domain::types::{CategoryName, ProductId};
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Data rendered by the product list page.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    /// Known categories offered by the filter control.
    pub categories: Vec<CategoryName>,
    /// The active filter, echoed back to the page.
    pub current_category: String,
}

/// Builds the list query for a category filter value.
///
/// [`ALL_CATEGORIES`] means no filter; anything else is an exact match on the
/// category label, whitespace included. Returns `None` for a blank value,
/// which no stored category can equal.
pub fn list_query_for(category: &str) -> Option<ProductListQuery> {
    if category == ALL_CATEGORIES {
        return Some(ProductListQuery::default());
    }
    CategoryName::new(category)
        .ok()
        .map(|name| ProductListQuery::default().category(name))
}

/// Core business logic for rendering the products page.
///
/// An absent or empty filter shows every category.
pub fn show_products<R>(category: Option<&str>, repo: &R) -> ServiceResult<ProductsPage>
where
    R: ProductReader,
{
    let current_category = match category {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => ALL_CATEGORIES.to_string(),
    };

    let products = match list_query_for(&current_category) {
        Some(query) => match repo.list_products(query) {
            Ok(products) => products,
            Err(e) => {
                log::error!("Failed to list products: {e}");
                return Err(ServiceError::Internal);
            }
        },
        None => Vec::new(),
    };

    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(ProductsPage {
        products,
        categories,
        current_category,
    })
}

/// Persists a decoded product and returns its identifier.
pub fn create_product<R>(product: &NewProduct, repo: &R) -> ServiceResult<ProductId>
where
    R: ProductWriter,
{
    repo.create_product(product).map_err(|e| {
        log::error!("Failed to create product: {e}");
        ServiceError::Internal
    })
}

/// Deletes a product by its external (hexadecimal) identifier.
///
/// Returns [`ServiceError::NotFound`] when nothing was removed, including
/// when the identifier cannot belong to any stored product.
pub fn delete_product<R>(product_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = ProductId::from_hex(product_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_product(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Flips the availability flag of a product.
///
/// The flip is a single store operation, so concurrent toggles never lose an
/// update.
pub fn toggle_product<R>(product_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = ProductId::from_hex(product_id).map_err(|_| ServiceError::NotFound)?;

    match repo.toggle_product_availability(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to toggle product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProductName, ProductPrice};
    use crate::repository::test::TestRepository;

    fn sample_product(id: i32, name: &str, category: &str, available: bool) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            price: ProductPrice::new(1.5).unwrap(),
            category: CategoryName::new(category).unwrap(),
            available,
        }
    }

    fn sample_repo() -> TestRepository {
        TestRepository::new(vec![
            sample_product(1, "Hammer", "Tools", true),
            sample_product(2, "Apple", "Food", false),
            sample_product(3, "Saw", "Tools", false),
        ])
    }

    #[test]
    fn all_category_lists_everything() {
        let repo = sample_repo();

        let page = show_products(Some("All"), &repo).unwrap();
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.current_category, "All");

        let page = show_products(None, &repo).unwrap();
        assert_eq!(page.products.len(), 3);
        assert_eq!(page.current_category, "All");
        assert_eq!(page.categories, vec!["Food", "Tools"]);
    }

    #[test]
    fn category_filter_is_exact_match() {
        let repo = sample_repo();

        let page = show_products(Some("Tools"), &repo).unwrap();
        assert_eq!(page.current_category, "Tools");
        assert_eq!(page.products.len(), 2);
        assert!(page.products.iter().all(|p| p.category == "Tools"));

        let page = show_products(Some("tools"), &repo).unwrap();
        assert!(page.products.is_empty());

        let page = show_products(Some(" Tools "), &repo).unwrap();
        assert_eq!(page.current_category, " Tools ");
        assert!(page.products.is_empty());

        let page = show_products(Some("   "), &repo).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.categories, vec!["Food", "Tools"]);
    }

    #[test]
    fn get_after_create_returns_inserted_fields() {
        let repo = TestRepository::default();
        let new_product = NewProduct {
            name: ProductName::new("Widget").unwrap(),
            price: ProductPrice::new(9.99).unwrap(),
            category: CategoryName::new("Tools").unwrap(),
            available: true,
        };

        let id = create_product(&new_product, &repo).unwrap();

        let stored = repo.get_product_by_id(id).unwrap().unwrap();
        assert_eq!(stored, new_product.into_product(id));
    }

    #[test]
    fn toggle_flips_only_availability() {
        let repo = sample_repo();
        let before = repo.get_product_by_id(ProductId::new(1).unwrap()).unwrap().unwrap();

        toggle_product("1", &repo).unwrap();
        let after = repo.get_product_by_id(before.id).unwrap().unwrap();
        assert_eq!(
            after,
            Product {
                available: !before.available,
                ..before.clone()
            }
        );

        toggle_product("1", &repo).unwrap();
        let again = repo.get_product_by_id(before.id).unwrap().unwrap();
        assert_eq!(again, before);
    }

    #[test]
    fn toggle_and_delete_report_missing_products() {
        let repo = sample_repo();

        assert_eq!(toggle_product("ff", &repo), Err(ServiceError::NotFound));
        assert_eq!(delete_product("ff", &repo), Err(ServiceError::NotFound));
        assert_eq!(delete_product("0", &repo), Err(ServiceError::NotFound));
        assert_eq!(repo.products().len(), 3);
    }

    #[test]
    fn delete_removes_product_once() {
        let repo = sample_repo();

        assert_eq!(delete_product("2", &repo), Ok(()));
        assert_eq!(delete_product("2", &repo), Err(ServiceError::NotFound));
        assert_eq!(repo.products().len(), 2);
    }
}
