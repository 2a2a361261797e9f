//! Report queueing, generation and retrieval.

use chrono::{DateTime, Utc};

use crate::domain::report::{NewReport, Report, ReportStatus};
use crate::domain::types::{CustomerId, ReportId};
use crate::dto::reports::{QueueReportQuery, ReportContext};
use crate::render::ReportRenderer;
use crate::repository::{CustomerReader, OrderListQuery, OrderReader, ReportReader, ReportWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::ReportStorage;

/// Records a pending report. Generation is left to the caller.
pub fn queue_report<R>(repo: &R, query: QueueReportQuery) -> ServiceResult<Report>
where
    R: CustomerReader + ReportWriter + ?Sized,
{
    let customer_id = query.customer_id.map(CustomerId::new).transpose()?;

    if let Some(customer_id) = customer_id
        && repo.get_customer_by_id(customer_id)?.is_none()
    {
        return Err(ServiceError::NotFound);
    }

    repo.create_report(&NewReport::new(customer_id))
        .map_err(|err| {
            log::error!("Failed to create report: {err}");
            ServiceError::from(err)
        })
}

/// Renders the report, stores the PDF and records the final status.
///
/// The report ends up `ready` on success and `failed` otherwise; the
/// rendering failure is returned after the status is recorded.
pub fn generate_report<R, S>(
    repo: &R,
    storage: &S,
    renderer: &ReportRenderer,
    report: &Report,
    now: DateTime<Utc>,
) -> ServiceResult<()>
where
    R: OrderReader + ReportWriter + ?Sized,
    S: ReportStorage + ?Sized,
{
    let result = render_and_store(repo, storage, renderer, report, now);

    let status = match &result {
        Ok(()) => ReportStatus::Ready,
        Err(err) => {
            log::error!("Failed to generate report {}: {err}", report.uid);
            ReportStatus::Failed
        }
    };

    repo.update_report_status(report.uid, status)
        .map_err(|err| {
            log::error!("Failed to update status of report {}: {err}", report.uid);
            ServiceError::from(err)
        })?;

    result
}

fn render_and_store<R, S>(
    repo: &R,
    storage: &S,
    renderer: &ReportRenderer,
    report: &Report,
    now: DateTime<Utc>,
) -> ServiceResult<()>
where
    R: OrderReader + ?Sized,
    S: ReportStorage + ?Sized,
{
    let mut query = OrderListQuery::new();
    if let Some(customer_id) = report.customer_id {
        query = query.customer(customer_id);
    }

    let orders = repo.list_orders(query)?;
    let context = ReportContext::new(renderer.report_time(now), &orders);
    let pdf = renderer.render_pdf(&context)?;
    storage.save_report(report.uid, &pdf)?;

    log::info!(
        "Report {} written with {} order(s)",
        report.uid,
        context.data.len()
    );
    Ok(())
}

/// Identifiers of all stored reports.
pub fn list_reports<S>(storage: &S) -> ServiceResult<Vec<String>>
where
    S: ReportStorage + ?Sized,
{
    storage.list_reports().map_err(|err| {
        log::error!("Failed to list reports: {err}");
        ServiceError::from(err)
    })
}

/// Returns the PDF bytes of a stored report.
pub fn load_report<S>(storage: &S, uid: &str) -> ServiceResult<Vec<u8>>
where
    S: ReportStorage + ?Sized,
{
    let uid: ReportId = uid.parse()?;
    storage.load_report(uid)?.ok_or(ServiceError::NotFound)
}

/// Returns the recorded state of a report.
pub fn get_report<R>(repo: &R, uid: &str) -> ServiceResult<Report>
where
    R: ReportReader + ?Sized,
{
    let uid: ReportId = uid.parse()?;
    repo.get_report(uid)?.ok_or(ServiceError::NotFound)
}
