use crate::dto::main::{Greeting, IndexPageData};
use crate::repository::{CustomerReader, OrderReader};
use crate::services::ServiceResult;
use crate::storage::ReportStorage;

/// Gathers the figures shown on the landing page.
pub fn load_index_page<R, S>(
    repo: &R,
    storage: &S,
    build_environment: &str,
) -> ServiceResult<IndexPageData>
where
    R: CustomerReader + OrderReader + ?Sized,
    S: ReportStorage + ?Sized,
{
    let reports = storage.list_reports().map_err(|err| {
        log::error!("Failed to list reports: {err}");
        err
    })?;

    Ok(IndexPageData {
        reports,
        customers: repo.count_customers()?,
        orders: repo.count_orders()?,
        build_environment: build_environment.to_string(),
    })
}

pub fn greet(name: &str) -> Greeting {
    Greeting {
        message: format!("Hello {name}!"),
    }
}
