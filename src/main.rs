use std::sync::Arc;

use dotenvy::dotenv;
use order_service::application::order_service::OrderService;
use order_service::config::AppConfig;
use order_service::infrastructure::order_repo::DieselOrderRepository;
use order_service::infrastructure::publisher::LogEventPublisher;
use order_service::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .expect("database configuration must be provided via DATABASE_URL or DB_SECRET_JSON");

    let pool = create_pool(&config.database_url);
    run_migrations(&pool);

    let service = OrderService::new(
        Arc::new(DieselOrderRepository::new(pool)),
        Arc::new(LogEventPublisher),
    );

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(service, &config.host, config.port)?.await
}
