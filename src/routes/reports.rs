use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;

use crate::dto::main::Reason;
use crate::dto::reports::{QueueReportQuery, ReportResponse};
use crate::render::ReportRenderer;
use crate::repository::DieselRepository;
use crate::routes::{error_response, reason_response};
use crate::services::ServiceError;
use crate::services::reports as report_service;
use crate::storage::FsReportStorage;

fn report_not_found(uid: &str) -> HttpResponse {
    reason_response(
        StatusCode::NOT_FOUND,
        format!("Report with id {uid} not found."),
    )
}

/// Records a report and renders it in the background.
///
/// Responds right away with the pending record. Poll `/report-status/{uid}/`
/// or `/reports` to learn when the PDF is available.
#[utoipa::path(
    post,
    path = "/queue-report/",
    tag = "reports",
    params(QueueReportQuery),
    responses(
        (status = 200, description = "Report queued", body = ReportResponse),
        (status = 404, description = "Unknown customer", body = Reason),
        (status = 422, description = "Invalid customer id", body = Reason)
    )
)]
#[post("/queue-report/")]
pub async fn queue_report(
    query: web::Query<QueueReportQuery>,
    repo: web::Data<DieselRepository>,
    storage: web::Data<FsReportStorage>,
    renderer: web::Data<ReportRenderer>,
) -> impl Responder {
    let report = match report_service::queue_report(repo.get_ref(), query.into_inner()) {
        Ok(report) => report,
        Err(ServiceError::NotFound) => {
            return reason_response(StatusCode::NOT_FOUND, "Customer not found.");
        }
        Err(err) => return error_response(&err),
    };

    let task_report = report.clone();
    actix_web::rt::spawn(async move {
        let uid = task_report.uid;
        let outcome = web::block(move || {
            report_service::generate_report(
                repo.get_ref(),
                storage.get_ref(),
                renderer.get_ref(),
                &task_report,
                Utc::now(),
            )
        })
        .await;

        // Service failures are logged where they happen.
        if let Err(err) = outcome {
            log::error!("Report task {uid} did not complete: {err}");
        }
    });

    HttpResponse::Ok().json(ReportResponse::from(report))
}

/// Lists the ids of generated reports.
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    responses((status = 200, description = "Report ids", body = Vec<String>))
)]
#[get("/reports")]
pub async fn list_reports(storage: web::Data<FsReportStorage>) -> impl Responder {
    match web::block(move || report_service::list_reports(storage.get_ref())).await {
        Ok(Ok(ids)) => HttpResponse::Ok().json(ids),
        Ok(Err(err)) => error_response(&err),
        Err(err) => {
            log::error!("Failed to list reports: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Downloads a generated report.
///
/// The PDF is sent as an attachment named `report.pdf`.
#[utoipa::path(
    get,
    path = "/get-report/{uid}/",
    tag = "reports",
    params(("uid" = String, Path, description = "Report id")),
    responses(
        (status = 200, description = "PDF document", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "Report not generated", body = Reason),
        (status = 422, description = "Malformed report id", body = Reason)
    )
)]
#[get("/get-report/{uid}/")]
pub async fn get_report(
    uid: web::Path<String>,
    storage: web::Data<FsReportStorage>,
) -> impl Responder {
    let uid = uid.into_inner();
    let lookup = uid.clone();

    match web::block(move || report_service::load_report(storage.get_ref(), &lookup)).await {
        Ok(Ok(content)) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"report.pdf\"",
            ))
            .body(content),
        Ok(Err(ServiceError::NotFound)) => report_not_found(&uid),
        Ok(Err(err)) => error_response(&err),
        Err(err) => {
            log::error!("Failed to load report {uid}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Shows the recorded state of a report.
#[utoipa::path(
    get,
    path = "/report-status/{uid}/",
    tag = "reports",
    params(("uid" = String, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report record", body = ReportResponse),
        (status = 404, description = "Unknown report", body = Reason),
        (status = 422, description = "Malformed report id", body = Reason)
    )
)]
#[get("/report-status/{uid}/")]
pub async fn report_status(
    uid: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match report_service::get_report(repo.get_ref(), &uid) {
        Ok(report) => HttpResponse::Ok().json(ReportResponse::from(report)),
        Err(ServiceError::NotFound) => report_not_found(&uid),
        Err(err) => error_response(&err),
    }
}
