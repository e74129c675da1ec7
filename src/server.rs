use anyhow::Context;
use clap::Parser;
use pricing_page::catalog;
use pricing_page::web::{router, AppState};
use pricing_page::ServerArgs;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = ServerArgs::parse();
    catalog::validate_all().context("plan catalog failed validation")?;

    let state = AppState::new(args.page_settings());
    let app = router(state);

    info!(
        addr = %args.addr,
        comparison_rows = ?args.comparison_rows,
        "starting pricing page server"
    );
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
