pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::list_orders,
        handlers::orders::add_item_to_order,
    ),
    components(schemas(
        application::dto::CreateOrderRequest,
        application::dto::OrderItemRequest,
        application::dto::OrderResponse,
        application::dto::OrderItemResponse,
    )),
    tags((name = "orders", description = "Order management endpoints"))
)]
pub struct ApiDoc;

/// Register the order routes and the shared service handle. Factored out of
/// [`build_server`] so HTTP-level tests can mount the same app against
/// in-memory collaborators.
pub fn configure_app(cfg: &mut web::ServiceConfig, service: OrderService) {
    cfg.app_data(web::Data::new(service)).service(
        web::scope("/orders")
            .route("", web::post().to(handlers::orders::create_order))
            .route("", web::get().to(handlers::orders::list_orders))
            .route("/{id}", web::get().to(handlers::orders::get_order))
            .route("/{id}/items", web::post().to(handlers::orders::add_item_to_order)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: OrderService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| configure_app(cfg, service.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
