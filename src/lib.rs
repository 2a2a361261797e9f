//! Order report service: customers and orders in SQLite, rendered into PDF
//! reports in the background and served over HTTP.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod storage;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::render::{ReportRenderer, offset_from_hours};
    use crate::repository::DieselRepository;
    use crate::routes::configure;
    use crate::seed::append_sample_data;
    use crate::storage::FsReportStorage;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        log::info!(
            "Starting order reports service ({} build)",
            server_config.build_environment
        );

        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;
        run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to migrate database: {e}")))?;

        let repo = DieselRepository::new(pool);

        if server_config.seed_sample_data {
            append_sample_data(&repo, &mut rand::rng())
                .map_err(|e| std::io::Error::other(format!("Failed to seed sample data: {e}")))?;
        }

        let storage = FsReportStorage::new(&server_config.reports_dir)
            .map_err(|e| std::io::Error::other(format!("Failed to open reports dir: {e}")))?;

        let offset = offset_from_hours(server_config.report_utc_offset_hours)
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        let renderer = ReportRenderer::new(tera.clone(), offset);

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(renderer.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
