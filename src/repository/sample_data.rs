use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::models::order::NewOrder as DbNewOrder;
use crate::repository::customer::insert_customers;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::order::insert_orders;
use crate::repository::{CustomerOrder, DieselRepository, SampleDataWriter};

impl SampleDataWriter for DieselRepository {
    fn create_customers_with_orders(
        &self,
        new_customers: &[NewCustomer],
        orders: &[CustomerOrder],
    ) -> RepositoryResult<(Vec<Customer>, usize)> {
        let mut conn = self.conn()?;

        let (created, inserted) = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = insert_customers(conn, new_customers)?;

            let mut rows = Vec::with_capacity(orders.len());
            for entry in orders {
                let mut row = DbNewOrder::from(&entry.order);
                if let Some(index) = entry.customer {
                    let customer = created.get(index).ok_or_else(|| {
                        RepositoryError::Validation(format!(
                            "order references customer #{index} of {}",
                            created.len()
                        ))
                    })?;
                    row.customer_id = Some(customer.id);
                }
                rows.push(row);
            }

            let inserted = if rows.is_empty() {
                0
            } else {
                insert_orders(conn, &rows)?
            };
            Ok((created, inserted))
        })?;

        let customers = created
            .into_iter()
            .map(|c| Customer::try_from(c).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;
        Ok((customers, inserted))
    }
}
