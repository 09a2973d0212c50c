//! Leitura API server binary
//!
//! Wires the measure lifecycle to its infrastructure: Postgres when
//! DATABASE_URL is set (in-memory ledger otherwise) and the Gemini
//! vision API for meter extraction.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use leitura::{MeasureRepository, MeterReader};
use leitura_server::adapters::{GeminiMeterReader, InMemoryMeasureRepository, PgMeasureRepository};
use leitura_server::application::MeasureService;
use leitura_server::config::ServerConfig;
use leitura_server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let repo: Arc<dyn MeasureRepository> = match &config.database_url {
        Some(url) => {
            let pool = sqlx::PgPool::connect(url).await?;
            sqlx::migrate!().run(&pool).await?;
            tracing::info!("Measures stored in Postgres");
            Arc::new(PgMeasureRepository::new(pool))
        }
        None => {
            tracing::warn!("No DATABASE_URL set - measures held in memory only");
            Arc::new(InMemoryMeasureRepository::new())
        }
    };

    let mut reader = GeminiMeterReader::new(config.gemini_api_key.clone());
    if let Some(model) = &config.gemini_model {
        reader = reader.with_model(model.clone());
    }
    if let Some(base) = &config.image_base_url {
        reader = reader.with_image_base_url(base.clone());
    }
    let reader: Arc<dyn MeterReader> = Arc::new(reader);

    let state = AppState {
        measure_service: Arc::new(MeasureService::new(repo, reader)),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Leitura API listening on http://{}", config.bind_addr);
    tracing::info!("Swagger UI: /swagger-ui");
    axum::serve(listener, router).await?;

    Ok(())
}
