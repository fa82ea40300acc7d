use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use travel_deals::config::AppConfig;
use travel_deals::handlers;
use travel_deals::services::ai::openai::OpenAiGenerator;
use travel_deals::services::provider::amadeus::AmadeusProvider;
use travel_deals::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.amadeus_client_id.is_empty() || config.amadeus_client_secret.is_empty() {
        tracing::warn!("AMADEUS_CLIENT_ID / AMADEUS_CLIENT_SECRET not set, provider calls will be rejected");
    }
    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY not set, /deals will fail with a configuration error");
    }

    tracing::info!("using Amadeus provider (url: {})", config.amadeus_base_url);
    let provider = AmadeusProvider::new(
        config.amadeus_base_url.clone(),
        config.amadeus_client_id.clone(),
        config.amadeus_client_secret.clone(),
    );

    tracing::info!("using OpenAI generator (model: {})", config.openai_model);
    let generator = OpenAiGenerator::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        provider: Box::new(provider),
        generator: Box::new(generator),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/flights", get(handlers::search::search_flights))
        .route("/hotels", get(handlers::search::search_hotels))
        .route("/deals", post(handlers::deals::best_deals))
        .route("/vehicle", post(handlers::search::search_vehicles))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
