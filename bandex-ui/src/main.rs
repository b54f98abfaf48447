//! bandex-ui - Browsable heavy-metal band catalog
//!
//! Paginated, searchable listing over a read-only band database,
//! rendered through a server-hosted web UI.

use anyhow::Result;
use bandex_common::config;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use bandex_ui::{build_router, db, AppState};

#[derive(Debug, Parser)]
#[command(name = "bandex-ui", about = "Browsable band catalog web UI")]
struct Args {
    /// Path to the band catalog database
    #[arg(long, env = "BANDEX_DATABASE")]
    database: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "BANDEX_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init, before any
    // database delays.
    info!(
        "Starting Bandex catalog UI (bandex-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Resolve the database path once at startup and fail fast if it is
    // absent, rather than surfacing the problem as a query-time 500.
    let db_path = config::resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());
    config::ensure_database_exists(&db_path)?;

    // The catalog never writes; connect in read-only mode
    let pool = match db::connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e);
        }
    };

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("bandex-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
