use diesel::prelude::*;

use crate::domain::order::{NewOrder, Order};
use crate::domain::types::CustomerId;
use crate::models::order::{NewOrder as DbNewOrder, Order as DbOrder};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OrderReader, OrderWriter};

impl OrderReader for DieselRepository {
    fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let items = orders::table
            .order((orders::created_at.desc(), orders::id.desc()))
            .load::<DbOrder>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Order>, _>>()?;

        Ok(items)
    }

    fn list_orders_for_customer(&self, customer_id: &CustomerId) -> RepositoryResult<Vec<Order>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let items = orders::table
            .filter(orders::paopaohu_id.eq(customer_id.as_str()))
            .order((orders::created_at.desc(), orders::id.desc()))
            .load::<DbOrder>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Order>, _>>()?;

        Ok(items)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<Order> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_order: DbNewOrder = order.clone().try_into()?;

        let inserted = diesel::insert_into(orders::table)
            .values(db_order)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(inserted.try_into()?)
    }
}
