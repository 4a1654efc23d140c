use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ProductId, ProductName, ProductPrice};

/// Category filter value meaning "no constraint".
pub const ALL_CATEGORIES: &str = "All";

/// A catalogue entry.
///
/// Serializes to the shape exposed by the JSON API:
/// `{id, name, price, category, available}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: CategoryName,
    pub available: bool,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: CategoryName,
    pub available: bool,
}

/// Partial update of a stored [`Product`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub category: Option<CategoryName>,
    pub available: Option<bool>,
}

impl ProductPatch {
    pub fn name(mut self, name: ProductName) -> Self {
        self.name = Some(name);
        self
    }
    pub fn price(mut self, price: ProductPrice) -> Self {
        self.price = Some(price);
        self
    }
    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }
    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Returns `true` when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.available.is_none()
    }

    /// Applies the patch to an in-memory product.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(available) = self.available {
            product.available = available;
        }
    }
}

impl NewProduct {
    /// Attaches a storage-assigned identifier.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            available: self.available,
        }
    }
}
