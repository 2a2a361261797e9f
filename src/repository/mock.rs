//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::order::Order;
use crate::domain::report::{NewReport, Report, ReportStatus};
use crate::domain::types::{CustomerId, ReportId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerOrder, CustomerReader, OrderListQuery, OrderReader, ReportReader, ReportWriter,
    SampleDataWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn count_customers(&self) -> RepositoryResult<usize>;
    }

    impl OrderReader for Repository {
        fn list_orders(
            &self,
            query: OrderListQuery,
        ) -> RepositoryResult<Vec<(Order, Option<Customer>)>>;
        fn count_orders(&self) -> RepositoryResult<usize>;
    }

    impl ReportReader for Repository {
        fn get_report(&self, uid: ReportId) -> RepositoryResult<Option<Report>>;
    }

    impl ReportWriter for Repository {
        fn create_report(&self, new_report: &NewReport) -> RepositoryResult<Report>;
        fn update_report_status(
            &self,
            uid: ReportId,
            status: ReportStatus,
        ) -> RepositoryResult<Report>;
    }

    impl SampleDataWriter for Repository {
        fn create_customers_with_orders(
            &self,
            new_customers: &[NewCustomer],
            orders: &[CustomerOrder],
        ) -> RepositoryResult<(Vec<Customer>, usize)>;
    }
}
