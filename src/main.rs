use actix_web::{App, HttpServer, middleware, web};

use product_catalog::db::establish_connection_pool;
use product_catalog::models::config::ServerConfig;
use product_catalog::repository::DieselRepository;
use product_catalog::routes::main::{health, index};
use product_catalog::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env();

    let pool = establish_connection_pool(&config.database_url).map_err(|e| {
        std::io::Error::other(format!(
            "Failed to establish SQLite connection pool for {}: {e}",
            config.database_url
        ))
    })?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .wrap(middleware::Logger::default())
            .service(index)
            .service(health)
            .service(create_product)
            .service(list_products)
            .service(get_product)
            .service(update_product)
            .service(delete_product)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
