//! Applies migrations and writes demo customers and orders to an empty database.

use std::env;

use config::Config;
use dotenvy::dotenv;

use order_reports::db::{establish_connection_pool, run_migrations};
use order_reports::models::config::ServerConfig;
use order_reports::repository::DieselRepository;
use order_reports::seed::append_sample_data;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").try_parsing(true))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to migrate database: {err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    match append_sample_data(&repo, &mut rand::rng()) {
        Ok(outcome) if outcome.customers == 0 => log::info!("Nothing to seed"),
        Ok(outcome) => log::info!(
            "Inserted {} customers and {} orders",
            outcome.customers,
            outcome.orders
        ),
        Err(err) => {
            log::error!("Failed to seed database: {err}");
            std::process::exit(1);
        }
    }
}
