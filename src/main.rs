use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vetan::config::Config;
use vetan::modules::components::controllers::configure_component_routes;
use vetan::modules::employees::controllers::configure_employee_routes;
use vetan::modules::payslips::controllers::configure_payslip_routes;
use vetan::modules::reports::controllers::configure_report_routes;
use vetan::modules::shifts::controllers::configure_shift_routes;
use vetan::modules::structures::controllers::configure_structure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vetan=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Vetan Payroll Back-Office");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let statutory = config.statutory.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(statutory.clone()))
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .configure(configure_employee_routes)
            .configure(configure_component_routes)
            .configure(configure_structure_routes)
            .configure(configure_shift_routes)
            .configure(configure_payslip_routes)
            .configure(configure_report_routes)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vetan"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Vetan Payroll Back-Office",
        "version": "0.1.0",
        "status": "running"
    }))
}
