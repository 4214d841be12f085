mod config;
mod core;
mod models;
mod routes;
mod services;

use crate::config::Settings;
use crate::core::NutritionScorer;
use crate::routes::predict::{handle_json_payload_error, AppState};
use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Nutriscore service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the trained predictor artifact
    let predictor = services::load_predictor(&settings.model.artifact_path).unwrap_or_else(|e| {
        tracing::error!(
            "Failed to load model artifact '{}': {}",
            settings.model.artifact_path,
            e
        );
        panic!("Model error: {}", e);
    });

    info!(
        "Predictor loaded ({} features)",
        predictor.feature_names().len()
    );

    // Load the static nutrient table, keeping only the columns the
    // predictor expects
    let table = services::load_food_table(&settings.data.dataset_path, predictor.feature_names())
        .unwrap_or_else(|e| {
            tracing::error!(
                "Failed to load dataset '{}': {}",
                settings.data.dataset_path,
                e
            );
            panic!("Dataset error: {}", e);
        });

    info!(
        "Food table loaded ({} rows, nutrient columns: {:?})",
        table.len(),
        table.columns
    );

    // Build application state; table and predictor are read-only from here on
    let app_state = AppState {
        scorer: Arc::new(NutritionScorer::new(table, predictor)),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
