use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductPatch,
};
use crate::domain::types::{CategoryName, ProductName, ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

/// Partial update of a [`Product`] row; `None` columns are skipped.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            category: CategoryName::new(product.category)?,
            available: product.available,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            price: product.price.get(),
            category: product.category.into_inner(),
            available: product.available,
        }
    }
}

impl From<&ProductPatch> for ProductChangeset {
    fn from(patch: &ProductPatch) -> Self {
        Self {
            name: patch.name.as_ref().map(|n| n.as_str().to_string()),
            price: patch.price.map(ProductPrice::get),
            category: patch.category.as_ref().map(|c| c.as_str().to_string()),
            available: patch.available,
        }
    }
}
