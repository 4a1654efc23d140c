use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::types::{CategoryName, ProductId};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset,
};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category {
            items = items.filter(products::category.eq(category.into_inner()));
        }

        let items = items
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn list_categories(&self) -> RepositoryResult<Vec<CategoryName>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let categories = products::table
            .select(products::category)
            .distinct()
            .order(products::category.asc())
            .load::<String>(&mut conn)?
            .into_iter()
            .map(CategoryName::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let id = diesel::insert_into(products::table)
            .values(&db_product)
            .returning(products::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ProductId::new(id)?)
    }

    fn update_product(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<usize> {
        use crate::schema::products;

        // Diesel rejects an UPDATE without any SET clause.
        if patch.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let changeset = ProductChangeset::from(patch);

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(&changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn toggle_product_availability(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(products::available.eq(diesel::dsl::not(products::available)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.filter(products::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
