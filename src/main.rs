//! Runs the MRI implant safety search proxy.
//!
//! Boots the REST API with the production Gemini pipeline behind it. The
//! Gemini client is built once here and injected into the router state; no
//! module-level singletons.
//!
//! # Environment Variables
//! - `GEMINI_API_KEY`: API key for the Gemini service (required)
//! - `GEMINI_MODEL`: Model name (default: "gemini-2.5-flash")
//! - `GEMINI_BASE_URL`: API base URL override
//! - `MRISAFE_REST_ADDR`: Server address (default: "0.0.0.0:3001")

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mrisafe_api_rest::{router, AppState};
use mrisafe_core::{GeminiClient, GeminiConfig, SafetyService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mrisafe=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MRISAFE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

    let config = GeminiConfig::from_env()?;
    let client = GeminiClient::new(config)?;
    let service = Arc::new(SafetyService::new(client));

    tracing::info!("++ Starting mrisafe REST on {}", addr);

    let app = router(AppState { service });
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
