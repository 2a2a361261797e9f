use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::order::{NewOrder, Order};
use crate::domain::report::{NewReport, Report, ReportStatus};
use crate::domain::types::{CustomerId, ReportId};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod order;
pub mod report;
pub mod sample_data;

/// Diesel-backed repository implementing every reader and writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub customer_id: Option<CustomerId>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

/// An order inserted together with new customers.
///
/// `customer` indexes the customers passed in the same call, so orders can
/// reference customers that do not have ids yet.
#[derive(Debug, Clone)]
pub struct CustomerOrder {
    pub order: NewOrder,
    pub customer: Option<usize>,
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    fn count_customers(&self) -> RepositoryResult<usize>;
}

pub trait OrderReader {
    /// Orders sorted by `initialized`, each paired with its customer when set.
    fn list_orders(&self, query: OrderListQuery)
    -> RepositoryResult<Vec<(Order, Option<Customer>)>>;
    fn count_orders(&self) -> RepositoryResult<usize>;
}

pub trait ReportReader {
    fn get_report(&self, uid: ReportId) -> RepositoryResult<Option<Report>>;
}

pub trait ReportWriter {
    fn create_report(&self, new_report: &NewReport) -> RepositoryResult<Report>;
    fn update_report_status(&self, uid: ReportId, status: ReportStatus)
    -> RepositoryResult<Report>;
}

pub trait SampleDataWriter {
    /// Inserts customers and their orders in a single transaction.
    ///
    /// Returns the created customers and the number of inserted orders.
    fn create_customers_with_orders(
        &self,
        new_customers: &[NewCustomer],
        orders: &[CustomerOrder],
    ) -> RepositoryResult<(Vec<Customer>, usize)>;
}
