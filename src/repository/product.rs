use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.desc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let inserted = diesel::insert_into(products::table)
            .values(db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_product(
        &self,
        id: ProductId,
        update: &NewProduct,
    ) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes: DbNewProduct = update.clone().into();

        let updated = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(changes)
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.filter(products::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
