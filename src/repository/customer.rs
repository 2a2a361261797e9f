use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, DieselRepository};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id.get())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(Customer::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let total: i64 = customers::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

/// Inserts customers one by one so each returned row keeps its id.
pub(crate) fn insert_customers(
    conn: &mut SqliteConnection,
    new_customers: &[NewCustomer],
) -> Result<Vec<DbCustomer>, diesel::result::Error> {
    use crate::schema::customers;

    new_customers
        .iter()
        .map(|customer| {
            diesel::insert_into(customers::table)
                .values(DbNewCustomer::from(customer))
                .get_result::<DbCustomer>(conn)
        })
        .collect()
}
