use std::env;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use config::Config;
use dotenvy::dotenv;
use tera::Tera;

use pushkind_crafts::db::{establish_connection_pool, run_pending_migrations};
use pushkind_crafts::models::config::ServerConfig;
use pushkind_crafts::repository::DieselRepository;
use pushkind_crafts::routes;
use pushkind_crafts::services::seed::seed_demo_crafts;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let secret_key = match Key::try_from(server_config.secret_key.as_bytes()) {
        Ok(key) => key,
        Err(e) => {
            log::error!("Invalid secret_key, expected at least 64 bytes: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => match run_pending_migrations(&mut conn) {
            Ok(applied) => log::info!("Applied {applied} pending migrations"),
            Err(e) => {
                log::error!("Failed to run migrations: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    if server_config.seed_demo_data && seed_demo_crafts(&repo).is_err() {
        log::error!("Failed to seed demo data");
        std::process::exit(1);
    }

    let tera = match Tera::new(&server_config.templates_dir) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting crafts inventory on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let assets_dir = server_config.assets_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &assets_dir))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
