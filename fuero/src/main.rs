use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuero::api::{create_router, AppState};
use fuero::config::Config;
use fuero::db::{CaseStore, Database, LibSqlBackend};
use fuero::embeddings::{LocalEncoder, TextEncoder};

#[derive(Parser)]
#[command(name = "fuero")]
#[command(about = "Jurisprudence retrieval and case memory engine for labor-law analysis")]
struct Args {
    /// Print the most recent stored cases and exit
    #[arg(long)]
    show_memory: bool,

    /// How many cases --show-memory prints
    #[arg(long, default_value_t = 5)]
    memory_limit: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuero=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let store: Arc<dyn CaseStore> = Arc::new(LibSqlBackend::new(raw_db));

    if args.show_memory {
        return show_memory(&*store, args.memory_limit).await;
    }

    tracing::info!("Loading embedding model: {}...", config.embeddings.model);
    let encoder: Arc<dyn TextEncoder> = Arc::new(LocalEncoder::new(&config.embeddings)?);

    let state = AppState::new(config.clone(), store, encoder)?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Fuero starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  Portal: {}", config.portal.base_url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Prints the most recent stored cases, newest first.
async fn show_memory(store: &dyn CaseStore, limit: u32) -> anyhow::Result<()> {
    let cases = store.recent(limit).await?;
    if cases.is_empty() {
        println!("No hay casos guardados en la memoria.");
        return Ok(());
    }

    println!("Últimos {} casos guardados:\n", cases.len());
    for case in cases {
        println!("ID: {}", case.id);
        println!("Tipo: {}", case.kind);
        println!("Texto: {}", case.source_text);
        println!("Resultado: {}", case.result_summary);
        println!("Fecha: {}", case.created_at.to_rfc3339());
        println!("{}", "-".repeat(50));
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
