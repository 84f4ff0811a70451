use actix_web::{middleware::{Logger, NormalizePath}, web, App, HttpServer};
use shopping_list::config::EnvConfig;
use shopping_list::db::item_store::ItemStore;
use shopping_list::routes::{configure_routes, error_handlers, fallback};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = EnvConfig::from_env();
    let addr = config.bind_addr();

    let store = web::Data::new(ItemStore::new());

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(error_handlers())
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(configure_routes)
            .default_service(web::to(fallback::not_found))
    })
    .bind(addr)?
    .run()
    .await
}
