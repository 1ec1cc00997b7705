use std::fs;
use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use chrono::Duration;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use paopao_shop::auth::SessionStore;
use paopao_shop::db::establish_connection_pool;
use paopao_shop::importer::{ProductImporter, SampleImporter};
use paopao_shop::models::config::ServerConfig;
use paopao_shop::repository::DieselRepository;
use paopao_shop::routes;
use paopao_shop::services::auth::ensure_default_admin;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load().map_err(io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(io::Error::other)?;
    let mut conn = pool.get().map_err(io::Error::other)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(io::Error::other)?;
    drop(conn);

    fs::create_dir_all(&config.upload_dir)?;

    let repo = DieselRepository::new(pool);
    ensure_default_admin(&config.admin_username, &config.admin_password, &repo)
        .map_err(io::Error::other)?;

    let sessions = web::Data::new(SessionStore::new(Duration::minutes(
        config.session_ttl_minutes,
    )));
    let importer: Arc<dyn ProductImporter> = Arc::new(SampleImporter::new(config.conversion_rate));
    let importer = web::Data::from(importer);

    let bind = (config.bind_address.clone(), config.port);
    log::info!("Starting server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(sessions.clone())
            .app_data(importer.clone())
            .service(routes::auth::admin_login)
            .service(routes::imports::scrape_1688)
            .service(routes::uploads::upload_image)
            .service(routes::products::list_products)
            .service(routes::products::create_product)
            .service(routes::products::update_product)
            .service(routes::products::delete_product)
            .service(routes::orders::list_orders)
            .service(routes::orders::list_customer_orders)
            .service(routes::orders::create_order)
            .service(Files::new("/uploads", config.upload_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
