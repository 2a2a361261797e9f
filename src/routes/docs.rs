//! OpenAPI description of the JSON endpoints and a page rendering it.

use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};
use utoipa::OpenApi;
use utoipa::openapi::path::Operation;

use crate::dto::main::{ApiEndpoint, DocsPageData, Greeting, Reason};
use crate::dto::reports::ReportResponse;
use crate::routes::render_template;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order reports",
        description = "Queue, track and download PDF reports of customer orders."
    ),
    paths(
        crate::routes::main::hello,
        crate::routes::reports::queue_report,
        crate::routes::reports::list_reports,
        crate::routes::reports::get_report,
        crate::routes::reports::report_status,
    ),
    components(schemas(Greeting, Reason, ReportResponse)),
    tags(
        (name = "reports", description = "Report generation and download"),
        (name = "misc", description = "Service checks")
    )
)]
pub struct ApiDoc;

/// Flattens the OpenAPI paths into one entry per operation, sorted by path.
pub fn api_endpoints() -> Vec<ApiEndpoint> {
    let openapi = ApiDoc::openapi();
    let mut endpoints = Vec::new();

    for (path, item) in openapi.paths.paths.iter() {
        let operations: [(&'static str, &Option<Operation>); 4] = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("DELETE", &item.delete),
        ];
        for (method, operation) in operations {
            let Some(operation) = operation else {
                continue;
            };
            endpoints.push(ApiEndpoint {
                method,
                path: path.clone(),
                summary: operation.summary.clone().unwrap_or_default(),
                description: operation.description.clone().unwrap_or_default(),
            });
        }
    }

    endpoints.sort_by(|a, b| a.path.cmp(&b.path).then(a.method.cmp(b.method)));
    endpoints
}

#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[get("/docs")]
pub async fn show_docs(tera: web::Data<Tera>) -> impl Responder {
    let openapi = ApiDoc::openapi();
    let page = DocsPageData {
        title: openapi.info.title,
        version: openapi.info.version,
        endpoints: api_endpoints(),
    };

    let mut context = Context::new();
    context.insert("current_page", "docs");
    context.insert("page", &page);

    render_template(&tera, "main/docs.html", &context)
}
