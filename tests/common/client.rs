use actix_web::{middleware::NormalizePath, web, App};
use shopping_list::db::item_store::ItemStore;
use shopping_list::routes::{configure_routes, error_handlers, fallback};

pub struct TestClient {
    pub store: web::Data<ItemStore>,
}

impl TestClient {
    pub fn new(store: web::Data<ItemStore>) -> Self {
        TestClient { store }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(error_handlers())
            .wrap(NormalizePath::trim())
            .app_data(self.store.clone())
            .configure(configure_routes)
            .default_service(web::to(fallback::not_found))
    }
}
