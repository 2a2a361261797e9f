use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::models::customer::Customer as DbCustomer;
use crate::models::order::{NewOrder as DbNewOrder, Order as DbOrder};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrderListQuery, OrderReader};

impl OrderReader for DieselRepository {
    fn list_orders(
        &self,
        query: OrderListQuery,
    ) -> RepositoryResult<Vec<(Order, Option<Customer>)>> {
        use crate::schema::{customers, orders};

        let mut conn = self.conn()?;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(customer_id) = query.customer_id {
            items = items.filter(orders::customer_id.eq(customer_id.get()));
        }

        let db_orders = items
            .order((orders::initialized.asc(), orders::id.asc()))
            .load::<DbOrder>(&mut conn)?;

        let customer_ids: Vec<i32> = db_orders
            .iter()
            .filter_map(|o| o.customer_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let mut customer_map: HashMap<i32, Customer> = HashMap::new();
        for db_customer in customers::table
            .filter(customers::id.eq_any(customer_ids))
            .load::<DbCustomer>(&mut conn)?
        {
            customer_map.insert(db_customer.id, Customer::try_from(db_customer)?);
        }

        db_orders
            .into_iter()
            .map(|db_order| {
                let customer = db_order
                    .customer_id
                    .and_then(|id| customer_map.get(&id).cloned());
                let order = Order::try_from(db_order).map_err(RepositoryError::from)?;
                Ok((order, customer))
            })
            .collect()
    }

    fn count_orders(&self) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let total: i64 = orders::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

pub(crate) fn insert_orders(
    conn: &mut SqliteConnection,
    rows: &[DbNewOrder],
) -> Result<usize, diesel::result::Error> {
    use crate::schema::orders;

    diesel::insert_into(orders::table).values(rows).execute(conn)
}
