use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::config::{Cli, Command};
use todo_server::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let pool = db::connect(&cli.database_url)
        .await
        .with_context(|| format!("failed to open database {}", cli.database_url))?;

    match cli.resolved_command() {
        Command::Migrate => {
            db::migrate(&pool).await.context("migration failed")?;
            pool.close().await;
        }
        Command::Serve { migrate } => {
            if migrate {
                db::migrate(&pool).await.context("migration failed")?;
            }
            let addr = cli.listen_addr();
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            tracing::info!("API running on http://{addr}");
            todo_server::run(listener, pool, shutdown_signal()).await?;
            tracing::info!("shut down");
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutting down");
}
