use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::main::Greeting;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{error_response, render_template};
use crate::services::main as main_service;
use crate::storage::FsReportStorage;

#[get("/")]
pub async fn show_index(
    repo: web::Data<DieselRepository>,
    storage: web::Data<FsReportStorage>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match main_service::load_index_page(
        repo.get_ref(),
        storage.get_ref(),
        &server_config.build_environment,
    ) {
        Ok(data) => data,
        Err(err) => return error_response(&err),
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("page", &data);

    render_template(&tera, "main/index.html", &context)
}

/// Greets the caller by name.
#[utoipa::path(
    get,
    path = "/hello/{name}/",
    tag = "misc",
    params(("name" = String, Path, description = "Name to greet")),
    responses((status = 200, description = "Greeting", body = Greeting))
)]
#[get("/hello/{name}/")]
pub async fn hello(name: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(main_service::greet(&name))
}
