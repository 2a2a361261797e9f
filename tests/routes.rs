use std::time::Duration;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::Value;
use tera::Tera;

use order_reports::models::config::ServerConfig;
use order_reports::render::{ReportRenderer, offset_from_hours};
use order_reports::repository::DieselRepository;
use order_reports::routes::configure;
use order_reports::seed::append_sample_data;
use order_reports::storage::FsReportStorage;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod common;

macro_rules! app {
    ($harness:expr) => {
        test::init_service(
            App::new()
                .configure(configure)
                .app_data(web::Data::new($harness.tera.clone()))
                .app_data(web::Data::new($harness.renderer.clone()))
                .app_data(web::Data::new($harness.repo.clone()))
                .app_data(web::Data::new($harness.storage.clone()))
                .app_data(web::Data::new($harness.config.clone())),
        )
        .await
    };
}

struct Harness {
    _db: common::TestDb,
    repo: DieselRepository,
    storage: FsReportStorage,
    renderer: ReportRenderer,
    tera: Tera,
    config: ServerConfig,
}

impl Harness {
    fn new(name: &str) -> Self {
        let db = common::TestDb::new(name);
        let repo = DieselRepository::new(db.pool());
        append_sample_data(&repo, &mut StdRng::seed_from_u64(11)).unwrap();

        let storage = FsReportStorage::new(db.dir().join("reports")).unwrap();
        let tera = Tera::new("templates/**/*").unwrap();
        let renderer = ReportRenderer::new(tera.clone(), offset_from_hours(3).unwrap());
        let config = ServerConfig {
            address: "127.0.0.1".into(),
            port: 0,
            database_url: name.into(),
            templates_dir: "templates/**/*".into(),
            reports_dir: storage.root().display().to_string(),
            build_environment: "test".into(),
            report_utc_offset_hours: 3,
            seed_sample_data: true,
        };

        Self {
            _db: db,
            repo,
            storage,
            renderer,
            tera,
            config,
        }
    }
}

#[actix_web::test]
async fn test_hello_greets_by_name() {
    let harness = Harness::new("test_hello_greets_by_name.db");
    let app = app!(harness);

    let req = test::TestRequest::get().uri("/hello/World/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Hello World!");
}

#[actix_web::test]
async fn test_index_page_renders() {
    let harness = Harness::new("test_index_page_renders.db");
    let app = app!(harness);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("4 customers"));
    assert!(html.contains("No reports generated yet."));
}

#[actix_web::test]
async fn test_get_report_unknown_and_malformed() {
    let harness = Harness::new("test_get_report_unknown_and_malformed.db");
    let app = app!(harness);

    let uid = "0b7a3c2e-0d7c-4f61-9a0e-3b0d4f6b2c11";
    let req = test::TestRequest::get()
        .uri(&format!("/get-report/{uid}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reason"], format!("Report with id {uid} not found."));

    let req = test::TestRequest::get()
        .uri("/get-report/not-a-uuid/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_queue_report_for_unknown_customer() {
    let harness = Harness::new("test_queue_report_for_unknown_customer.db");
    let app = app!(harness);

    let req = test::TestRequest::post()
        .uri("/queue-report/?customer_id=999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/reports").to_request();
    let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_queued_report_becomes_downloadable() {
    let harness = Harness::new("test_queued_report_becomes_downloadable.db");
    let app = app!(harness);

    let req = test::TestRequest::post()
        .uri("/queue-report/?customer_id=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let queued: Value = test::read_body_json(resp).await;
    let uid = queued["uid"].as_str().unwrap().to_string();
    assert_eq!(queued["customer_id"], 1);

    let mut status = Value::Null;
    for _ in 0..100 {
        let req = test::TestRequest::get()
            .uri(&format!("/report-status/{uid}/"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        status = body["status"].clone();
        if status != "pending" {
            break;
        }
        actix_web::rt::time::sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(status, "ready");

    let req = test::TestRequest::get().uri("/reports").to_request();
    let listed: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![uid.clone()]);

    let req = test::TestRequest::get()
        .uri(&format!("/get-report/{uid}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"report.pdf\""
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn test_report_status_unknown() {
    let harness = Harness::new("test_report_status_unknown.db");
    let app = app!(harness);

    let req = test::TestRequest::get()
        .uri("/report-status/0b7a3c2e-0d7c-4f61-9a0e-3b0d4f6b2c11/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_report_status_malformed_id() {
    let harness = Harness::new("test_report_status_malformed_id.db");
    let app = app!(harness);

    let req = test::TestRequest::get()
        .uri("/report-status/not-a-uuid/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["reason"].is_string());
}

#[actix_web::test]
async fn test_openapi_document_lists_routes() {
    let harness = Harness::new("test_openapi_document_lists_routes.db");
    let app = app!(harness);

    let req = test::TestRequest::get().uri("/openapi.json").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["info"]["title"], "Order reports");
    assert!(body["paths"]["/queue-report/"]["post"].is_object());
    assert!(body["paths"]["/get-report/{uid}/"]["get"].is_object());
    assert!(body["components"]["schemas"]["ReportResponse"].is_object());
}

#[actix_web::test]
async fn test_docs_page_renders() {
    let harness = Harness::new("test_docs_page_renders.db");
    let app = app!(harness);

    let req = test::TestRequest::get().uri("/docs").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("report-status"));
    assert!(html.contains("openapi.json"));
    assert!(html.contains("Records a report and renders it in the background."));
}
