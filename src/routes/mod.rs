//! HTTP handlers and the helpers they share.

use actix_web::{HttpResponse, http::StatusCode, web};
use tera::{Context, Tera};

use crate::dto::main::Reason;
use crate::services::ServiceError;

pub mod docs;
pub mod main;
pub mod reports;

/// Registers every application route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::hello)
        .service(docs::openapi_json)
        .service(docs::show_docs)
        .service(reports::queue_report)
        .service(reports::list_reports)
        .service(reports::get_report)
        .service(reports::report_status);
}

/// Renders a Tera template into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// JSON body `{"reason": ...}` with the given status.
pub fn reason_response(status: StatusCode, reason: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(Reason {
        reason: reason.into(),
    })
}

/// Maps a service failure to an HTTP response.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => reason_response(StatusCode::NOT_FOUND, "Not found."),
        ServiceError::TypeConstraint(msg) => {
            reason_response(StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
        }
        ServiceError::Conflict(msg) => reason_response(StatusCode::CONFLICT, msg.clone()),
        other => {
            log::error!("Request failed: {other}");
            reason_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
        }
    }
}
